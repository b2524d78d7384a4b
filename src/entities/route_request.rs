use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::Error;

/// Origin and destination of a ride search.
///
/// Coordinates are carried through for callers but play no part in pricing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub origin_coordinates: Option<Coordinates>,
    #[serde(default)]
    pub destination_coordinates: Option<Coordinates>,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            origin_coordinates: None,
            destination_coordinates: None,
        }
    }

    pub fn with_coordinates(
        mut self,
        origin: Option<Coordinates>,
        destination: Option<Coordinates>,
    ) -> Self {
        self.origin_coordinates = origin;
        self.destination_coordinates = destination;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.origin.is_empty() || self.destination.is_empty() {
            return Err(Error::validation_error(
                "Please enter both source and destination",
            ));
        }

        Ok(())
    }
}

/// Where one end of a route comes from before it becomes text.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationSource {
    Text { description: String },
    Coordinates { coordinates: Coordinates },
    GooglePlace { place_id: String },
}
