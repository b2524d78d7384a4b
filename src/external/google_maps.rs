use reqwest::Response as HttpResponse;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::env;

use crate::{
    config::GoogleMapsConfig,
    entities::{Coordinates, Place, PlaceSuggestion},
    error::Error,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PlaceDetails {
    place_id: String,
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResult {
    place_id: Option<String>,
    formatted_address: String,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct AddressComponent {
    long_name: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    result: Option<T>,
    results: Option<T>,
    predictions: Option<T>,
}

impl GeocodeResult {
    fn component(&self, kind: &str) -> Option<&str> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
            .map(|c| c.long_name.as_str())
    }

    /// `"{street} {city}"`, or the full address when neither part is known.
    fn label(&self) -> String {
        let label = format!(
            "{} {}",
            self.component("route").unwrap_or_default(),
            self.component("locality").unwrap_or_default()
        );

        match label.trim() {
            "" => self.formatted_address.clone(),
            trimmed => trimmed.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GoogleMaps {
    config: GoogleMapsConfig,
    client: reqwest::Client,
}

impl GoogleMaps {
    pub fn new(config: GoogleMapsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn key(&self) -> Result<String, Error> {
        self.config
            .api_key
            .clone()
            .ok_or_else(|| Error::env_var_error(env::VarError::NotPresent))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base.trim_end_matches('/'), path)
    }

    async fn decode<T: DeserializeOwned>(res: HttpResponse) -> Result<Response<T>, Error> {
        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(Error::invalid_input_error());
        } else if status_code != 200 {
            return Err(Error::upstream_error());
        }

        Ok(res.json().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_place_suggestions(
        &self,
        input: &str,
        location: Option<Coordinates>,
        radius: Option<f64>,
        session_token: Option<&str>,
    ) -> Result<Vec<PlaceSuggestion>, Error> {
        let mut req = self
            .client
            .get(self.url("/maps/api/place/autocomplete/json"))
            .query(&[("key", self.key()?)])
            .query(&[("input", input)])
            .query(&[("language", "en")]);

        if let Some(location) = location {
            let location: String = location.into();
            req = req
                .query(&[("location", location)])
                .query(&[("radius", radius.unwrap_or(500.0))]);
        }

        if let Some(session_token) = session_token {
            req = req.query(&[("sessiontoken", session_token)]);
        }

        let data: Response<Vec<PlaceSuggestion>> = Self::decode(req.send().await?).await?;

        match data.status.as_str() {
            "ZERO_RESULTS" => Ok(vec![]),
            "OK" => data.predictions.ok_or_else(Error::upstream_error),
            _ => Err(Error::upstream_error()),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_place(&self, id: &str, session_token: Option<&str>) -> Result<Place, Error> {
        let mut req = self
            .client
            .get(self.url("/maps/api/place/details/json"))
            .query(&[("key", self.key()?)])
            .query(&[("place_id", id)]);

        if let Some(session_token) = session_token {
            req = req.query(&[("sessiontoken", session_token)]);
        }

        let data: Response<PlaceDetails> = Self::decode(req.send().await?).await?;

        if data.status == "NOT_FOUND" || data.status == "INVALID_REQUEST" {
            return Err(Error::not_found_error());
        } else if data.status != "OK" {
            return Err(Error::upstream_error());
        }

        let details = data.result.ok_or_else(Error::upstream_error)?;

        Ok(Place {
            place_id: Some(details.place_id),
            description: details.formatted_address,
            coordinates: details.geometry.location,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Option<Place>, Error> {
        let latlng: String = coordinates.into();

        let res = self
            .client
            .get(self.url("/maps/api/geocode/json"))
            .query(&[("key", self.key()?)])
            .query(&[("latlng", latlng)])
            .send()
            .await?;

        let data: Response<Vec<GeocodeResult>> = Self::decode(res).await?;

        match data.status.as_str() {
            "ZERO_RESULTS" => Ok(None),
            "OK" => Ok(data.results.unwrap_or_default().first().map(|first| Place {
                place_id: first.place_id.clone(),
                description: first.label(),
                coordinates,
            })),
            _ => Err(Error::upstream_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> GoogleMaps {
        GoogleMaps::new(GoogleMapsConfig {
            api_base: server.url(),
            api_key: Some("test-key".into()),
        })
    }

    #[tokio::test]
    async fn suggestions_pass_key_and_location() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "test-key".into()),
                Matcher::UrlEncoded("input".into(), "MG Road".into()),
                Matcher::UrlEncoded("location".into(), "12.97,77.59".into()),
            ]))
            .with_body(
                json!({
                    "status": "OK",
                    "predictions": [
                        { "place_id": "abc", "description": "MG Road, Bengaluru", "types": ["route"] }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let suggestions = client(&server)
            .find_place_suggestions("MG Road", Some(Coordinates::new(12.97, 77.59)), None, None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            suggestions,
            vec![PlaceSuggestion {
                place_id: "abc".into(),
                description: "MG Road, Bengaluru".into(),
            }]
        );
    }

    #[tokio::test]
    async fn zero_results_is_empty() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Any)
            .with_body(json!({ "status": "ZERO_RESULTS", "predictions": [] }).to_string())
            .create_async()
            .await;

        let suggestions = client(&server)
            .find_place_suggestions("nowhere", None, None, None)
            .await
            .unwrap();

        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn place_details_become_a_place() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/place/details/json")
            .match_query(Matcher::UrlEncoded("place_id".into(), "abc".into()))
            .with_body(
                json!({
                    "status": "OK",
                    "result": {
                        "place_id": "abc",
                        "formatted_address": "MG Road, Bengaluru",
                        "geometry": { "location": { "lat": 12.97, "lng": 77.6 } }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let place = client(&server).find_place("abc", None).await.unwrap();

        assert_eq!(place.place_id.as_deref(), Some("abc"));
        assert_eq!(place.coordinates, Coordinates::new(12.97, 77.6));
    }

    #[tokio::test]
    async fn reverse_geocode_labels_street_and_city() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/geocode/json")
            .match_query(Matcher::UrlEncoded("latlng".into(), "12.97,77.59".into()))
            .with_body(
                json!({
                    "status": "OK",
                    "results": [{
                        "place_id": "xyz",
                        "formatted_address": "1 Brigade Rd, Bengaluru, Karnataka",
                        "address_components": [
                            { "long_name": "1", "types": ["street_number"] },
                            { "long_name": "Brigade Road", "types": ["route"] },
                            { "long_name": "Bengaluru", "types": ["locality", "political"] }
                        ],
                        "geometry": { "location": { "lat": 12.97, "lng": 77.59 } }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let place = client(&server)
            .reverse_geocode(Coordinates::new(12.97, 77.59))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(place.description, "Brigade Road Bengaluru");
    }

    #[tokio::test]
    async fn upstream_failures_and_missing_key() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/maps/api/place/details/json")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let err = client(&server).find_place("abc", None).await.unwrap_err();
        assert_eq!(err, Error::upstream_error());

        let keyless = GoogleMaps::new(GoogleMapsConfig {
            api_base: server.url(),
            api_key: None,
        });
        let err = keyless.find_place("abc", None).await.unwrap_err();
        assert_eq!(err.code, 1);
    }
}
