use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::core::config::PlacesConfig;
use crate::core::error::{AppError, Result};
use crate::shared::constants::PLACE_DETAILS_FIELDS;

/// Text Search response
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceSearchResult>,
    #[serde(default)]
    pub status: String,
    pub error_message: Option<String>,
}

/// A single Text Search match
#[derive(Debug, Deserialize)]
pub struct PlaceSearchResult {
    pub place_id: String,
    pub name: Option<String>,
}

/// Place Details response; `result` is absent when the lookup found nothing
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Option<PlaceGeometry>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceGeometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Client for the Google Places web service
pub struct GooglePlacesClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(http_client: reqwest::Client, config: &PlacesConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.clone(),
            api_key: config.places_api_key.clone(),
        }
    }

    /// Free-text search, first results page only
    pub async fn text_search(&self, query: &str, radius: u32) -> Result<TextSearchResponse> {
        let params = [("query", query.to_string()), ("radius", radius.to_string())];
        let response: TextSearchResponse = self.execute_request("textsearch", &params).await?;

        log_unexpected_status("Text search", &response.status, &response.error_message);

        Ok(response)
    }

    /// Details lookup for a single place id
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse> {
        let params = [
            ("place_id", place_id.to_string()),
            ("fields", PLACE_DETAILS_FIELDS.to_string()),
        ];
        let response: PlaceDetailsResponse = self.execute_request("details", &params).await?;

        log_unexpected_status("Place details", &response.status, &response.error_message);

        Ok(response)
    }

    /// Execute a GET against `{base_url}/{endpoint}/json` and decode the body
    async fn execute_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let url = format!("{}/{}/json?{}", self.base_url, endpoint, query_string);
        tracing::debug!("Places request: {}&key=***", url);

        let response = self
            .http_client
            .get(format!("{}&key={}", url, urlencoding::encode(&self.api_key)))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Places {} request failed: {:?}", endpoint, e);
                AppError::ExternalService(format!("Places {} request failed: {}", endpoint, e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Places API error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalService(format!(
                "Places {} returned HTTP {}",
                endpoint, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse Places {} response: {:?}", endpoint, e);
            AppError::ExternalService(format!(
                "Failed to parse Places {} response: {}",
                endpoint, e
            ))
        })
    }
}

fn log_unexpected_status(operation: &str, status: &str, error_message: &Option<String>) {
    match status {
        "OK" | "ZERO_RESULTS" | "" => {}
        other => tracing::warn!(
            "{} returned status {}: {}",
            operation,
            other,
            error_message.as_deref().unwrap_or("no error message")
        ),
    }
}
