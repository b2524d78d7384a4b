use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::Destination;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    email: String,
    password: String,
}

#[derive(Serialize, Deserialize)]
pub struct Navigation {
    destination: Destination,
}

impl From<Destination> for Navigation {
    fn from(destination: Destination) -> Self {
        Self { destination }
    }
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Navigation>, Error> {
    let destination = api.sign_in(params.email, params.password).await?;

    Ok(Json(destination.into()))
}

pub async fn destroy(Extension(api): Extension<DynAPI>) -> Result<Json<Navigation>, Error> {
    let destination = api.sign_out().await?;

    Ok(Json(destination.into()))
}

pub async fn startup(Extension(api): Extension<DynAPI>) -> Json<Navigation> {
    Json(api.startup_destination().await.into())
}
