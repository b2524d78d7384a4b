use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::UserProfile;
use crate::error::Error;

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<UserProfile>, Error> {
    let profile = api.load_profile().await?;

    Ok(profile.into())
}

pub async fn update(
    Extension(api): Extension<DynAPI>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>, Error> {
    let profile = api.save_profile(profile).await?;

    Ok(profile.into())
}
