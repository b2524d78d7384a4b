use async_trait::async_trait;
use std::collections::HashSet;

use crate::launch::{DeepLinkChecker, PlatformError};

/// Capability answered from the set of schemes a remote client says it can open.
///
/// `open` succeeds without side effects: the client performs the actual
/// hand-off once it receives the outcome.
#[derive(Debug, Clone, Default)]
pub struct ReportedCapability {
    installed: HashSet<String>,
}

fn normalize(scheme: &str) -> String {
    let scheme = scheme.trim().to_ascii_lowercase();

    match scheme.strip_suffix("://") {
        Some(bare) => bare.to_string(),
        None => scheme,
    }
}

impl ReportedCapability {
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            installed: schemes.into_iter().map(|s| normalize(s.as_ref())).collect(),
        }
    }
}

#[async_trait]
impl DeepLinkChecker for ReportedCapability {
    async fn can_open(&self, scheme: &str) -> Result<bool, PlatformError> {
        Ok(self.installed.contains(&normalize(scheme)))
    }

    async fn open(&self, url: &str) -> Result<(), PlatformError> {
        tracing::debug!("client will open {}", url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matches_with_or_without_separator() {
        let capability = ReportedCapability::new(["uber://", "OLACABS"]);

        assert!(capability.can_open("uber://").await.unwrap());
        assert!(capability.can_open("olacabs://").await.unwrap());
        assert!(!capability.can_open("rapido://").await.unwrap());
    }
}
