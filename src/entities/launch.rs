use serde::{Deserialize, Serialize};

use crate::entities::ServiceProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn store_url(&self, service: ServiceProvider) -> String {
        let info = service.info();

        match self {
            Self::Ios => format!("https://apps.apple.com/app/id{}", info.ios_app_id),
            Self::Android => format!(
                "https://play.google.com/store/apps/details?id={}",
                info.android_package
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LaunchOutcome {
    Opened {
        scheme: String,
    },
    NeedsInstall {
        service: ServiceProvider,
        store_url: String,
    },
}

/// Text for the install confirmation the caller shows before opening a store listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPrompt {
    pub title: String,
    pub message: String,
}

impl InstallPrompt {
    pub fn for_service(service: ServiceProvider) -> Self {
        Self {
            title: format!("{} not installed", service),
            message: format!("Do you want to install {}?", service),
        }
    }
}
