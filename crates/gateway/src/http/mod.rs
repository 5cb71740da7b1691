//! HTTP surface — router construction and the request handlers.

pub mod error;

use axum::{
    extract::{Path, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::LogTailConfig;
use crate::http::error::map_docker_error;
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = if state.config.server.enable_cors {
        let origins = state
            .config
            .server
            .cors_origins
            .iter()
            .filter_map(|s| s.parse::<axum::http::HeaderValue>().ok())
            .collect::<Vec<_>>();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        // When CORS is disabled, use a restrictive layer (same-origin only)
        CorsLayer::new()
    };

    let request_timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .route("/api/containers", get(list_containers_handler))
        .route("/api/containers/{id}/logs", get(container_logs_handler))
        .route("/health", get(health_handler))
        .route("/", get(root_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Timeout for requests (prevents indefinitely hanging connections)
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                ))
                .layer(cors),
        )
        .with_state(state)
}

/// Root handler — shows API info.
async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Harborview Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "containers": "/api/containers",
            "logs": "/api/containers/{id}/logs",
            "health": "/health"
        }
    }))
}

/// GET /api/containers — every container the daemon knows about,
/// including stopped ones, in daemon-reported order.
async fn list_containers_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.docker.list_containers().await {
        Ok(containers) => Json(containers).into_response(),
        Err(e) => {
            tracing::warn!("Listing containers failed: {}", e);
            map_docker_error(e).into_response()
        }
    }
}

#[derive(Deserialize)]
struct LogsQuery {
    tail: Option<u32>,
}

/// GET /api/containers/{id}/logs — combined stdout+stderr tail as
/// `text/plain`. `?tail=` overrides the configured line count, clamped
/// to the configured maximum.
async fn container_logs_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> impl IntoResponse {
    let tail = effective_tail(query.tail, &state.config.logs);

    match state.docker.container_logs(&id, tail).await {
        Ok(text) => text.into_response(),
        Err(e) => {
            tracing::warn!(container = %id, "Fetching logs failed: {}", e);
            map_docker_error(e).into_response()
        }
    }
}

/// Health check handler — reflects whether the daemon answers a ping.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let docker_ok = state.docker.ping().await.is_ok();
    let status_code = if docker_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(json!({
            "status": if docker_ok { "healthy" } else { "unhealthy" },
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "docker": if docker_ok { "reachable" } else { "unreachable" },
        })),
    )
}

/// Resolve the tail line count for one request: the `?tail=` override
/// clamped into `[1, max_tail_lines]`, else the configured default.
fn effective_tail(requested: Option<u32>, config: &LogTailConfig) -> u32 {
    match requested {
        Some(tail) => tail.clamp(1, config.max_tail_lines),
        None => config.tail_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{FakeContainer, FakeDocker};
    use crate::config::GatewayConfig;
    use crate::docker::summary::{ContainerSummary, PortMapping};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn web_container() -> FakeContainer {
        FakeContainer {
            summary: ContainerSummary {
                id: "abc123".to_string(),
                name: "web".to_string(),
                image: "nginx:latest".to_string(),
                state: "running".to_string(),
                ports: vec![PortMapping {
                    private_port: 80,
                    public_port: Some(8080),
                    protocol: "tcp".to_string(),
                }],
            },
            logs: (1..=15).map(|n| format!("line {n}")).collect(),
        }
    }

    fn stopped_container() -> FakeContainer {
        FakeContainer {
            summary: ContainerSummary {
                id: "def456".to_string(),
                name: "db".to_string(),
                image: "postgres:16".to_string(),
                state: "exited".to_string(),
                ports: vec![],
            },
            logs: vec![],
        }
    }

    async fn router_with(docker: FakeDocker) -> Router {
        let state = AppState::new(GatewayConfig::default(), Arc::new(docker));
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_list_containers_includes_stopped() {
        let docker = FakeDocker::new();
        docker.add_container(web_container()).await;
        docker.add_container(stopped_container()).await;
        let app = router_with(docker).await;

        let response = app.oneshot(get("/api/containers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["name"], "web");
        assert_eq!(list[0]["state"], "running");
        assert_eq!(list[0]["ports"][0]["private"], 80);
        assert_eq!(list[0]["ports"][0]["public"], 8080);
        assert_eq!(list[0]["ports"][0]["type"], "tcp");
        assert_eq!(list[1]["state"], "exited");
    }

    #[tokio::test]
    async fn test_list_containers_idempotent() {
        let docker = FakeDocker::new();
        docker.add_container(web_container()).await;
        docker.add_container(stopped_container()).await;
        let app = router_with(docker).await;

        let first = body_json(app.clone().oneshot(get("/api/containers")).await.unwrap()).await;
        let second = body_json(app.oneshot(get("/api/containers")).await.unwrap()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_containers_daemon_unreachable() {
        let docker = FakeDocker::new();
        docker.set_unreachable().await;
        let app = router_with(docker).await;

        let response = app.oneshot(get("/api/containers")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_logs_default_tail_is_ten_lines() {
        let docker = FakeDocker::new();
        docker.add_container(web_container()).await;
        let app = router_with(docker).await;

        let response = app.oneshot(get("/api/containers/abc123/logs")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let text = body_text(response).await;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "line 6");
        assert_eq!(lines[9], "line 15");
    }

    #[tokio::test]
    async fn test_logs_tail_override() {
        let docker = FakeDocker::new();
        docker.add_container(web_container()).await;
        let app = router_with(docker).await;

        let response = app
            .oneshot(get("/api/containers/abc123/logs?tail=2"))
            .await
            .unwrap();
        let text = body_text(response).await;
        assert_eq!(text, "line 14\nline 15\n");
    }

    #[tokio::test]
    async fn test_logs_unknown_container_is_an_error() {
        let docker = FakeDocker::new();
        docker.add_container(web_container()).await;
        let app = router_with(docker).await;

        let response = app
            .oneshot(get("/api/containers/nope/logs"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("nope"));
    }

    #[tokio::test]
    async fn test_health_reflects_daemon() {
        let app = router_with(FakeDocker::new()).await;
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");

        let docker = FakeDocker::new();
        docker.set_unreachable().await;
        let app = router_with(docker).await;
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_effective_tail_defaults_and_clamps() {
        let config = LogTailConfig {
            tail_lines: 10,
            max_tail_lines: 100,
        };
        assert_eq!(effective_tail(None, &config), 10);
        assert_eq!(effective_tail(Some(25), &config), 25);
        assert_eq!(effective_tail(Some(0), &config), 1);
        assert_eq!(effective_tail(Some(9999), &config), 100);
    }
}
