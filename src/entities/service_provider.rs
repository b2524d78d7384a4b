use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceProvider {
    Uber,
    Ola,
    Rapido,
    NammaYatri,
}

/// Static per-provider metadata used for display and hand-off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub color: &'static str,
    pub deep_link: &'static str,
    pub ios_app_id: &'static str,
    pub android_package: &'static str,
}

const UBER: ProviderInfo = ProviderInfo {
    name: "Uber",
    color: "#000000",
    deep_link: "uber://",
    ios_app_id: "368677368",
    android_package: "com.ubercab",
};

const OLA: ProviderInfo = ProviderInfo {
    name: "Ola",
    color: "#00A652",
    deep_link: "olacabs://",
    ios_app_id: "539179177",
    android_package: "com.olacabs.customer",
};

const RAPIDO: ProviderInfo = ProviderInfo {
    name: "Rapido",
    color: "#FFD700",
    deep_link: "rapido://",
    ios_app_id: "1442072406",
    android_package: "com.rapido.passenger",
};

const NAMMA_YATRI: ProviderInfo = ProviderInfo {
    name: "Namma Yatri",
    color: "#FF6B35",
    deep_link: "nammayatri://",
    ios_app_id: "1633941745",
    android_package: "in.juspay.nammayatri",
};

impl ServiceProvider {
    pub const ALL: [ServiceProvider; 4] = [Self::Uber, Self::Ola, Self::Rapido, Self::NammaYatri];

    pub fn info(&self) -> &'static ProviderInfo {
        match self {
            Self::Uber => &UBER,
            Self::Ola => &OLA,
            Self::Rapido => &RAPIDO,
            Self::NammaYatri => &NAMMA_YATRI,
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn deep_link(&self) -> &'static str {
        self.info().deep_link
    }
}

impl fmt::Display for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
