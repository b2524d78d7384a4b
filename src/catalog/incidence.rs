use crate::entities::{EtaRange, ServiceProvider, VehicleClass};

/// Which vehicle classes each provider offers, in catalog order.
pub const INCIDENCE: [(ServiceProvider, VehicleClass, EtaRange); 12] = [
    (ServiceProvider::Uber, VehicleClass::Bike, EtaRange::new(3, 5)),
    (ServiceProvider::Uber, VehicleClass::Auto, EtaRange::new(5, 8)),
    (ServiceProvider::Uber, VehicleClass::Sedan, EtaRange::new(5, 8)),
    (ServiceProvider::Uber, VehicleClass::Suv, EtaRange::new(6, 10)),
    (ServiceProvider::Ola, VehicleClass::Bike, EtaRange::new(4, 6)),
    (ServiceProvider::Ola, VehicleClass::Auto, EtaRange::new(6, 10)),
    (ServiceProvider::Ola, VehicleClass::Sedan, EtaRange::new(6, 10)),
    (ServiceProvider::Ola, VehicleClass::Suv, EtaRange::new(7, 12)),
    (ServiceProvider::Rapido, VehicleClass::Bike, EtaRange::new(3, 5)),
    (ServiceProvider::Rapido, VehicleClass::Auto, EtaRange::new(4, 7)),
    (ServiceProvider::NammaYatri, VehicleClass::Auto, EtaRange::new(4, 7)),
    (ServiceProvider::NammaYatri, VehicleClass::Sedan, EtaRange::new(4, 7)),
];

pub fn base_price(class: VehicleClass) -> i32 {
    match class {
        VehicleClass::Bike => 25,
        VehicleClass::Auto => 45,
        VehicleClass::Sedan => 85,
        VehicleClass::Suv => 120,
    }
}

pub fn offers(service: ServiceProvider, class: VehicleClass) -> bool {
    INCIDENCE
        .iter()
        .any(|(s, c, _)| *s == service && *c == class)
}
