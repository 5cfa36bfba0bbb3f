//! HTTP clients for the upstream recipe and nutrition APIs.
//!
//! Every operation builds its own `reqwest::Client` and drops it on return;
//! nothing is pooled or shared between invocations.

pub mod fooddata;
pub mod mealdb;

pub use fooddata::FoodDataClient;
pub use mealdb::MealDbClient;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Errors that can occur when talking to an upstream API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The upstream answered with a non-success status
    #[error("API error ({status}): {body}")]
    ApiError { status: u16, body: String },
    /// A network error occurred
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    /// The body was not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Sends a GET request and decodes the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    debug!(url = %response.url(), status = status.as_u16(), "Upstream responded");

    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::ApiError {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(format!("{}: {}", e, body)))
}

/// Joins a base URL and an endpoint path with exactly one slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
