mod reported;
mod resolver;

use async_trait::async_trait;
use std::fmt;

pub use reported::ReportedCapability;
pub use resolver::{launch, open_store, resolve, resolve_service};

/// Host-side ability to query and open URI schemes and URLs.
#[async_trait]
pub trait DeepLinkChecker {
    async fn can_open(&self, scheme: &str) -> Result<bool, PlatformError>;
    async fn open(&self, url: &str) -> Result<(), PlatformError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub message: String,
}

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PlatformError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchError {
    PlatformUnavailable,
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlatformUnavailable => f.write_str("platform unavailable"),
        }
    }
}

impl std::error::Error for LaunchError {}
