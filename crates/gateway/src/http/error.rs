//! Shared Docker error → HTTP response mapping.
//!
//! Single source of truth for converting [`DockerError`] into a status code
//! and a `{"error": …}` body. Used by every API handler.

use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::docker::client::DockerError;

/// Map a [`DockerError`] to the appropriate HTTP response.
///
/// Mapping rules:
/// - `ContainerNotFound` → `404 Not Found`
/// - Everything else (connection failure, permission, daemon error) → `500`
///
/// The underlying message is always carried in the body so failures are
/// never silently swallowed; nothing is retried.
pub fn map_docker_error(err: DockerError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        DockerError::ContainerNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() })))
}
