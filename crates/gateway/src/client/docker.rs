//! DockerOps trait — abstract interface for the gateway's Docker queries.
//!
//! `live.rs` provides the real bollard-backed implementation.
//! `fake.rs` provides a test double.

use std::pin::Pin;

use crate::docker::client::DockerError;
use crate::docker::summary::ContainerSummary;

/// Unified async interface over the Docker daemon.
///
/// Object-safe thanks to `Pin<Box<…>>` returns. Implementations must be
/// `Send + Sync` so they can live inside `Arc<dyn DockerOps>` shared across
/// request handlers.
pub trait DockerOps: Send + Sync {
    fn list_containers(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ContainerSummary>, DockerError>> + Send + '_>>;

    fn container_logs<'a>(
        &'a self,
        id: &'a str,
        tail: u32,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, DockerError>> + Send + 'a>>;

    fn ping(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<(), DockerError>> + Send + '_>>;
}
