use std::future::Future;
use std::time::Duration;

use crate::entities::{LaunchOutcome, Platform, RideOffer, ServiceProvider};
use crate::launch::{DeepLinkChecker, LaunchError, PlatformError};

async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T, LaunchError>
where
    F: Future<Output = Result<T, PlatformError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            tracing::warn!("platform refused request: {}", err);
            Err(LaunchError::PlatformUnavailable)
        }
        Err(_) => {
            tracing::warn!("platform did not answer within {:?}", timeout);
            Err(LaunchError::PlatformUnavailable)
        }
    }
}

/// Decides between opening the provider's app and sending the user to its store listing.
pub async fn resolve<C: DeepLinkChecker + ?Sized>(
    offer: &RideOffer,
    platform: Platform,
    capability: &C,
    timeout: Duration,
) -> Result<LaunchOutcome, LaunchError> {
    resolve_service(offer.service, platform, capability, timeout).await
}

#[tracing::instrument(skip(capability))]
pub async fn resolve_service<C: DeepLinkChecker + ?Sized>(
    service: ServiceProvider,
    platform: Platform,
    capability: &C,
    timeout: Duration,
) -> Result<LaunchOutcome, LaunchError> {
    let scheme = service.deep_link();

    if bounded(timeout, capability.can_open(scheme)).await? {
        return Ok(LaunchOutcome::Opened {
            scheme: scheme.to_string(),
        });
    }

    Ok(LaunchOutcome::NeedsInstall {
        service,
        store_url: platform.store_url(service),
    })
}

/// Resolves and, when the app is present, opens it straight away.
///
/// A `NeedsInstall` outcome is returned untouched: opening the store is
/// left to [`open_store`] once the user has confirmed.
#[tracing::instrument(skip(capability))]
pub async fn launch<C: DeepLinkChecker + ?Sized>(
    service: ServiceProvider,
    platform: Platform,
    capability: &C,
    timeout: Duration,
) -> Result<LaunchOutcome, LaunchError> {
    let outcome = resolve_service(service, platform, capability, timeout).await?;

    if let LaunchOutcome::Opened { scheme } = &outcome {
        bounded(timeout, capability.open(scheme)).await?;
        tracing::info!("handed off to {}", service);
    }

    Ok(outcome)
}

#[tracing::instrument(skip(capability))]
pub async fn open_store<C: DeepLinkChecker + ?Sized>(
    store_url: &str,
    capability: &C,
    timeout: Duration,
) -> Result<(), LaunchError> {
    bounded(timeout, capability.open(store_url)).await
}
