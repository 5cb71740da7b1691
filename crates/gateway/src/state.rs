use std::sync::Arc;

use crate::client::DockerOps;
use crate::config::GatewayConfig;

/// Shared application state (thread-safe).
///
/// The Docker handle is constructed once at startup and injected into
/// every request handler; handlers hold no other state, so concurrent
/// requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub docker: Arc<dyn DockerOps>,
}

impl AppState {
    pub fn new(config: GatewayConfig, docker: Arc<dyn DockerOps>) -> Self {
        Self {
            config: Arc::new(config),
            docker,
        }
    }
}
