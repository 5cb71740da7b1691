//! HTTP client for the gateway's two read queries.

use serde::Deserialize;
use thiserror::Error;

use crate::model::ContainerSummary;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Gateway unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gateway error ({status}): {message}")]
    Gateway { status: u16, message: String },
}

/// Error body the gateway sends on failure.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// GET /api/containers
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, ApiError> {
        let url = format!("{}/containers", self.base_url);
        let response = check(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// GET /api/containers/{id}/logs
    pub async fn container_logs(&self, id: &str) -> Result<String, ApiError> {
        let url = format!("{}/containers/{}/logs", self.base_url, id);
        let response = check(self.http.get(&url).send().await?).await?;
        Ok(response.text().await?)
    }
}

/// Turn a non-2xx response into a typed error, keeping the gateway's
/// `{"error": …}` message when it sends one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());

    Err(ApiError::Gateway {
        status: status.as_u16(),
        message,
    })
}
