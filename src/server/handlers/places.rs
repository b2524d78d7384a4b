use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{Coordinates, Place, PlaceSuggestion};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct SuggestionParams {
    input: String,
    lat: Option<f64>,
    lng: Option<f64>,
    radius: Option<f64>,
}

pub async fn find_suggestions(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<PlaceSuggestion>>, Error> {
    let location = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
        _ => None,
    };

    let suggestions = api
        .suggest_places(params.input, location, params.radius)
        .await?;

    Ok(suggestions.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<Place>, Error> {
    let place = api.find_place(id).await?;

    Ok(place.into())
}

pub async fn locate(
    Extension(api): Extension<DynAPI>,
    Json(coordinates): Json<Coordinates>,
) -> Result<Json<Place>, Error> {
    let place = api.locate(coordinates).await?;

    Ok(place.into())
}
