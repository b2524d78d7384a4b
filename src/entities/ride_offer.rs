use serde::Serialize;
use std::fmt;

use crate::entities::{ProviderInfo, ServiceProvider, VehicleClass};

/// An estimated fare in whole rupees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Fare {
    pub amount: i32,
}

impl Fare {
    pub fn new(amount: i32) -> Self {
        Self { amount }
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{20b9}{}", self.amount)
    }
}

/// A pickup window in minutes, shown as `"3-5 min"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EtaRange {
    pub min: u32,
    pub max: u32,
}

impl EtaRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for EtaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} min", self.min, self.max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RideOffer {
    pub service: ServiceProvider,
    pub vehicle_class: VehicleClass,
    pub estimated_price: Fare,
    pub estimated_price_label: String,
    pub estimated_time: EtaRange,
    pub estimated_time_label: String,
    pub provider: ProviderInfo,
}

impl RideOffer {
    pub fn new(
        service: ServiceProvider,
        vehicle_class: VehicleClass,
        estimated_price: Fare,
        estimated_time: EtaRange,
    ) -> Self {
        Self {
            service,
            vehicle_class,
            estimated_price,
            estimated_price_label: estimated_price.to_string(),
            estimated_time,
            estimated_time_label: estimated_time.to_string(),
            provider: *service.info(),
        }
    }
}
