use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Bike,
    Auto,
    Sedan,
    Suv,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [Self::Bike, Self::Auto, Self::Sedan, Self::Suv];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Auto => "auto",
            Self::Sedan => "sedan",
            Self::Suv => "suv",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| Error::validation_error(&format!("unknown vehicle type: {}", s)))
    }
}

/// The vehicle tab selected in the results list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VehicleFilter {
    #[default]
    All,
    Only(VehicleClass),
}

impl VehicleFilter {
    pub fn admits(&self, class: VehicleClass) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => *tag == class,
        }
    }
}

impl FromStr for VehicleFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

impl TryFrom<String> for VehicleFilter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VehicleFilter> for String {
    fn from(filter: VehicleFilter) -> Self {
        match filter {
            VehicleFilter::All => "all".into(),
            VehicleFilter::Only(class) => class.name().into(),
        }
    }
}
