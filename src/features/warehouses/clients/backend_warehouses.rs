use reqwest::StatusCode;

use crate::core::error::{AppError, Result};
use crate::features::warehouses::models::CreateWarehouseRequest;

/// Result of a single create call that reached the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Rejected { status: u16, body: String },
}

/// Client for the backend's warehouse collection
pub struct BackendWarehousesClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl BackendWarehousesClient {
    pub fn new(http_client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.into(),
        }
    }

    /// `POST /warehouses`; only HTTP 201 counts as created
    pub async fn create_warehouse(&self, request: &CreateWarehouseRequest) -> Result<CreateOutcome> {
        let url = format!("{}/warehouses", self.api_url);

        tracing::debug!("Creating warehouse at {}: {}", url, request.warehouse.name);

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to create warehouse: {}", e);
                AppError::Backend(format!("Failed to create warehouse: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(CreateOutcome::Created);
        }

        let body = response.text().await.unwrap_or_default();
        Ok(CreateOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
