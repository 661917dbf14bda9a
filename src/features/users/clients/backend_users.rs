use reqwest::StatusCode;

use crate::core::error::{AppError, Result};
use crate::features::users::models::BackendUser;
use crate::shared::types::ListPayload;

/// Client for the backend's user listing
pub struct BackendUsersClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl BackendUsersClient {
    pub fn new(http_client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
        }
    }

    /// List all users. Returns `None` when the backend answers anything but 200.
    pub async fn list_users(&self) -> Result<Option<Vec<BackendUser>>> {
        let url = format!("{}/users", self.api_url);

        tracing::debug!("Fetching users from backend: {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch users: {}", e);
            AppError::Backend(format!("Failed to fetch users: {}", e))
        })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("User listing returned HTTP {} - {}", status, body);
            return Ok(None);
        }

        let payload = response
            .json::<ListPayload<BackendUser>>()
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse users response: {}", e);
                AppError::Backend(format!("Failed to parse users response: {}", e))
            })?;

        Ok(Some(payload.into_items()))
    }
}
