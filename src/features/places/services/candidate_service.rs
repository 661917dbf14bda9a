use std::sync::Arc;

use crate::core::error::Result;
use crate::features::places::clients::{GooglePlacesClient, PlaceDetails};
use crate::features::places::models::{CandidatePlace, Coordinate};
use crate::shared::constants::{FALLBACK_WAREHOUSE_NAME, SEARCH_QUERY_PREFIX};

/// Service for turning a location string into enriched candidate places
pub struct CandidateService {
    places_client: Arc<GooglePlacesClient>,
    search_radius: u32,
}

impl CandidateService {
    pub fn new(places_client: Arc<GooglePlacesClient>, search_radius: u32) -> Self {
        Self {
            places_client,
            search_radius,
        }
    }

    /// Search for cold storage warehouses near `location` and look up details
    /// for each match, in search order.
    ///
    /// Matches without a details payload are skipped. Request failures are
    /// returned as errors and end the run.
    pub async fn fetch_candidates(&self, location: &str) -> Result<Vec<CandidatePlace>> {
        let query = search_query(location);
        let search = self
            .places_client
            .text_search(&query, self.search_radius)
            .await?;

        tracing::debug!("Text search returned {} results", search.results.len());

        let mut candidates = Vec::with_capacity(search.results.len());
        for place in search.results {
            tracing::debug!(
                "Looking up details for {} ({})",
                place.place_id,
                place.name.as_deref().unwrap_or("unnamed")
            );

            let details = self.places_client.place_details(&place.place_id).await?;

            let Some(result) = details.result else {
                continue;
            };

            match to_candidate(place.place_id, result) {
                Some(candidate) => candidates.push(candidate),
                None => tracing::warn!("Place details without geometry, skipping"),
            }
        }

        Ok(candidates)
    }
}

pub fn search_query(location: &str) -> String {
    format!("{} {}", SEARCH_QUERY_PREFIX, location)
}

/// Build a candidate from a details payload; `None` when it has no coordinates
fn to_candidate(place_id: String, details: PlaceDetails) -> Option<CandidatePlace> {
    let location = details.geometry?.location;

    Some(CandidatePlace {
        place_id,
        name: details
            .name
            .unwrap_or_else(|| FALLBACK_WAREHOUSE_NAME.to_string()),
        address: details.formatted_address.unwrap_or_default(),
        coordinate: Coordinate {
            longitude: location.lng,
            latitude: location.lat,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PlacesConfig;
    use crate::shared::test_helpers::{details_body, empty_details_body, search_body};
    use mockito::Matcher;

    fn service(server: &mockito::Server) -> CandidateService {
        let config = PlacesConfig {
            maps_api_key: "maps-key".to_string(),
            places_api_key: "places-key".to_string(),
            base_url: server.url(),
        };
        let client = GooglePlacesClient::new(reqwest::Client::new(), &config);
        CandidateService::new(Arc::new(client), 5000)
    }

    #[test]
    fn test_search_query_template() {
        assert_eq!(
            search_query("Osaka, Japan"),
            "cold storage warehouse Osaka, Japan"
        );
    }

    #[tokio::test]
    async fn test_missing_details_payload_is_skipped() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/textsearch/json")
            .match_query(Matcher::Any)
            .with_body(search_body(&["p1", "p2"]))
            .create_async()
            .await;
        server
            .mock("GET", "/details/json")
            .match_query(Matcher::UrlEncoded("place_id".into(), "p1".into()))
            .with_body(empty_details_body())
            .create_async()
            .await;
        server
            .mock("GET", "/details/json")
            .match_query(Matcher::UrlEncoded("place_id".into(), "p2".into()))
            .with_body(details_body("Namba Cold Chain", 34.66, 135.50))
            .create_async()
            .await;

        let candidates = service(&server)
            .fetch_candidates("Osaka, Japan")
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].place_id, "p2");
        assert_eq!(candidates[0].name, "Namba Cold Chain");
        assert_eq!(candidates[0].coordinate.longitude, 135.50);
        assert_eq!(candidates[0].coordinate.latitude, 34.66);
    }

    #[tokio::test]
    async fn test_details_without_name_or_address_use_fallbacks() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/textsearch/json")
            .match_query(Matcher::Any)
            .with_body(search_body(&["p1"]))
            .create_async()
            .await;
        server
            .mock("GET", "/details/json")
            .match_query(Matcher::Any)
            .with_body(r#"{"status": "OK", "result": {"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}}"#)
            .create_async()
            .await;

        let candidates = service(&server).fetch_candidates("Osaka").await.unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, FALLBACK_WAREHOUSE_NAME);
        assert_eq!(candidates[0].address, "");
    }

    #[tokio::test]
    async fn test_details_without_geometry_are_skipped() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/textsearch/json")
            .match_query(Matcher::Any)
            .with_body(search_body(&["p1"]))
            .create_async()
            .await;
        server
            .mock("GET", "/details/json")
            .match_query(Matcher::Any)
            .with_body(r#"{"status": "OK", "result": {"name": "Nowhere"}}"#)
            .create_async()
            .await;

        let candidates = service(&server).fetch_candidates("Osaka").await.unwrap();

        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_details_failure_propagates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/textsearch/json")
            .match_query(Matcher::Any)
            .with_body(search_body(&["p1"]))
            .create_async()
            .await;
        server
            .mock("GET", "/details/json")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let result = service(&server).fetch_candidates("Osaka").await;

        tokio_test::assert_err!(result);
    }
}
