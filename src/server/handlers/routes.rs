use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{LocationSource, RouteRequest};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin: LocationSource,
    destination: LocationSource,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<RouteRequest>, Error> {
    let route = api.build_route(params.origin, params.destination).await?;

    Ok(route.into())
}
