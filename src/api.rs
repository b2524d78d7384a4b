use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::entities::{
    Catalog, Coordinates, Destination, InstallPrompt, LaunchOutcome, LocationSource, Place,
    PlaceSuggestion, Platform, RouteRequest, ServiceProvider, UserProfile, VehicleFilter,
};
use crate::error::Error;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub service: ServiceProvider,
    pub platform: Platform,
    #[serde(default)]
    pub installed_schemes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchResponse {
    #[serde(flatten)]
    pub outcome: LaunchOutcome,
    pub prompt: Option<InstallPrompt>,
}

#[async_trait]
pub trait SearchAPI {
    async fn search(&self, request: RouteRequest, filter: VehicleFilter) -> Result<Catalog, Error>;
}

#[async_trait]
pub trait LaunchAPI {
    async fn launch(&self, request: LaunchRequest) -> Result<LaunchResponse, Error>;
}

#[async_trait]
pub trait SessionAPI {
    async fn sign_in(&self, email: String, password: String) -> Result<Destination, Error>;
    async fn sign_out(&self) -> Result<Destination, Error>;
    async fn startup_destination(&self) -> Destination;
    async fn load_profile(&self) -> Result<UserProfile, Error>;
    async fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, Error>;
}

#[async_trait]
pub trait PlaceAPI {
    async fn suggest_places(
        &self,
        input: String,
        location: Option<Coordinates>,
        radius: Option<f64>,
    ) -> Result<Vec<PlaceSuggestion>, Error>;
    async fn find_place(&self, place_id: String) -> Result<Place, Error>;
    async fn locate(&self, coordinates: Coordinates) -> Result<Place, Error>;
    async fn build_route(
        &self,
        origin: LocationSource,
        destination: LocationSource,
    ) -> Result<RouteRequest, Error>;
}

pub trait API: SearchAPI + LaunchAPI + SessionAPI + PlaceAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
