mod catalog;
mod coordinates;
mod launch;
mod place;
mod profile;
mod ride_offer;
mod route_request;
mod service_provider;
mod vehicle_class;

pub use catalog::Catalog;
pub use coordinates::Coordinates;
pub use launch::{InstallPrompt, LaunchOutcome, Platform};
pub use place::{Place, PlaceSuggestion};
pub use profile::{Destination, StoredSession, UserProfile};
pub use ride_offer::{EtaRange, Fare, RideOffer};
pub use route_request::{LocationSource, RouteRequest};
pub use service_provider::{ProviderInfo, ServiceProvider};
pub use vehicle_class::{VehicleClass, VehicleFilter};
