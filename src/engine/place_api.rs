use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceAPI,
    entities::{Coordinates, LocationSource, Place, PlaceSuggestion, RouteRequest},
    error::Error,
};

impl Engine {
    async fn resolve_location(
        &self,
        source: LocationSource,
    ) -> Result<(String, Option<Coordinates>), Error> {
        let place = match source {
            LocationSource::Text { description } => return Ok((description, None)),
            LocationSource::Coordinates { coordinates } => self.locate(coordinates).await?,
            LocationSource::GooglePlace { place_id } => self.find_place(place_id).await?,
        };

        Ok((place.description, Some(place.coordinates)))
    }
}

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn suggest_places(
        &self,
        input: String,
        location: Option<Coordinates>,
        radius: Option<f64>,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        if input.trim().is_empty() {
            return Ok(vec![]);
        }

        self.maps
            .find_place_suggestions(&input, location, radius, None)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, place_id: String) -> Result<Place, Error> {
        self.maps.find_place(&place_id, None).await
    }

    #[tracing::instrument(skip(self))]
    async fn locate(&self, coordinates: Coordinates) -> Result<Place, Error> {
        let unavailable = || Error::platform_error("Unable to get current location");

        match self.maps.reverse_geocode(coordinates).await {
            Ok(Some(place)) => Ok(place),
            Ok(None) => Err(unavailable()),
            Err(err) => {
                tracing::warn!("reverse geocoding failed: {}", err);
                Err(unavailable())
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn build_route(
        &self,
        origin: LocationSource,
        destination: LocationSource,
    ) -> Result<RouteRequest, Error> {
        let ((origin, origin_coordinates), (destination, destination_coordinates)) =
            futures::try_join!(
                self.resolve_location(origin),
                self.resolve_location(destination)
            )?;

        Ok(RouteRequest::new(origin, destination)
            .with_coordinates(origin_coordinates, destination_coordinates))
    }
}
