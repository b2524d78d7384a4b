use super::Engine;

use async_trait::async_trait;

use crate::{
    api::SearchAPI,
    catalog::{filtered, generate},
    entities::{Catalog, RouteRequest, VehicleFilter},
    error::Error,
};

#[async_trait]
impl SearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search(&self, request: RouteRequest, filter: VehicleFilter) -> Result<Catalog, Error> {
        request.validate()?;

        // one search at a time; a second caller is turned away, not queued
        let _guard = self.search_guard.try_lock().map_err(|_| {
            tracing::warn!("rejecting search while another is in flight");
            Error::search_in_progress_error()
        })?;

        tokio::time::sleep(self.config.search_latency).await;

        let catalog = self.with_rand(|rand| generate(&request, rand))??;

        tracing::info!("found {} ride options", catalog.len());

        Ok(filtered(catalog, filter))
    }
}
