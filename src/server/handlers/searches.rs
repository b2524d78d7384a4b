use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{Catalog, Coordinates, RouteRequest, VehicleFilter};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin: String,
    destination: String,
    #[serde(default)]
    origin_coordinates: Option<Coordinates>,
    #[serde(default)]
    destination_coordinates: Option<Coordinates>,
    #[serde(default)]
    vehicle: VehicleFilter,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Catalog>, Error> {
    let request = RouteRequest::new(params.origin, params.destination)
        .with_coordinates(params.origin_coordinates, params.destination_coordinates);

    let catalog = api.search(request, params.vehicle).await?;

    Ok(catalog.into())
}
