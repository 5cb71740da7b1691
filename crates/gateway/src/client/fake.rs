//! Fake — test double for Docker operations.
//!
//! Provides a deterministic [`FakeDocker`] that implements [`DockerOps`]
//! using in-memory state, so handlers can be tested without a running
//! Docker daemon.

use std::pin::Pin;

use tokio::sync::Mutex;

use crate::client::docker::DockerOps;
use crate::docker::client::DockerError;
use crate::docker::summary::ContainerSummary;

/// A canned container for the fake store.
#[derive(Clone, Debug)]
pub struct FakeContainer {
    pub summary: ContainerSummary,
    /// Full log history, one entry per line, oldest first.
    pub logs: Vec<String>,
}

/// Mutable inner state protected by a mutex.
///
/// Containers live in a `Vec` so list order is deterministic and
/// preserved, matching the order-preserving projection guarantee.
#[derive(Default)]
struct Inner {
    containers: Vec<FakeContainer>,
    unreachable: bool,
}

/// A fake Docker client for deterministic testing.
pub struct FakeDocker {
    inner: Mutex<Inner>,
}

impl FakeDocker {
    /// Create an empty fake Docker client.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Seed a container into the fake store.
    pub async fn add_container(&self, container: FakeContainer) {
        self.inner.lock().await.containers.push(container);
    }

    /// Make every subsequent call fail as if the socket were gone.
    pub async fn set_unreachable(&self) {
        self.inner.lock().await.unreachable = true;
    }
}

impl Default for FakeDocker {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerOps for FakeDocker {
    fn list_containers(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ContainerSummary>, DockerError>> + Send + '_>> {
        Box::pin(async {
            let state = self.inner.lock().await;
            if state.unreachable {
                return Err(DockerError::ConnectionFailed(
                    "No such file or directory (os error 2)".to_string(),
                ));
            }
            Ok(state.containers.iter().map(|c| c.summary.clone()).collect())
        })
    }

    fn container_logs<'a>(
        &'a self,
        id: &'a str,
        tail: u32,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, DockerError>> + Send + 'a>> {
        Box::pin(async move {
            let state = self.inner.lock().await;
            if state.unreachable {
                return Err(DockerError::ConnectionFailed(
                    "No such file or directory (os error 2)".to_string(),
                ));
            }
            let container = state
                .containers
                .iter()
                .find(|c| c.summary.id == id)
                .ok_or_else(|| DockerError::ContainerNotFound(id.to_string()))?;

            let skip = container.logs.len().saturating_sub(tail as usize);
            let mut text = String::new();
            for line in &container.logs[skip..] {
                text.push_str(line);
                text.push('\n');
            }
            Ok(text)
        })
    }

    fn ping(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<(), DockerError>> + Send + '_>> {
        Box::pin(async {
            let state = self.inner.lock().await;
            if state.unreachable {
                return Err(DockerError::ConnectionFailed(
                    "No such file or directory (os error 2)".to_string(),
                ));
            }
            Ok(())
        })
    }
}
