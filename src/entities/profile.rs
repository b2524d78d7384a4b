use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::VehicleClass;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub preferred_vehicle: VehicleClass,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            phone: String::new(),
            preferred_vehicle: VehicleClass::Sedan,
        }
    }
}

impl UserProfile {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::validation_error("Please enter your name"));
        }

        Ok(())
    }
}

/// Everything kept on the device between launches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(default)]
    pub token: Option<Uuid>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub signed_in_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl StoredSession {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, email: String) {
        self.token = Some(Uuid::new_v4());
        self.email = Some(email);
        self.signed_in_at = Some(Utc::now());
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.signed_in_at = None;
    }
}

/// Screen the host should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Search,
    Authentication,
}
