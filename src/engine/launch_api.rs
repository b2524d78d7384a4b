use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{LaunchAPI, LaunchRequest, LaunchResponse},
    entities::{InstallPrompt, LaunchOutcome},
    error::Error,
    launch::{self, ReportedCapability},
};

#[async_trait]
impl LaunchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn launch(&self, request: LaunchRequest) -> Result<LaunchResponse, Error> {
        let capability = ReportedCapability::new(&request.installed_schemes);

        let outcome = launch::launch(
            request.service,
            request.platform,
            &capability,
            self.config.launch_timeout,
        )
        .await?;

        let prompt = match &outcome {
            LaunchOutcome::NeedsInstall { service, .. } => {
                tracing::info!("{} is not installed, offering store listing", service);
                Some(InstallPrompt::for_service(*service))
            }
            LaunchOutcome::Opened { .. } => None,
        };

        Ok(LaunchResponse { outcome, prompt })
    }
}
