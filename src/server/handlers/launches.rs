use axum::extract::{Extension, Json};

use crate::api::{DynAPI, LaunchRequest, LaunchResponse};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<LaunchRequest>,
) -> Result<Json<LaunchResponse>, Error> {
    let response = api.launch(params).await?;

    Ok(response.into())
}
