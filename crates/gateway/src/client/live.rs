//! Live — implements `DockerOps` for the real bollard-backed `DockerClient`.

use std::pin::Pin;

use crate::client::docker::DockerOps;
use crate::docker::client::{DockerClient, DockerError};
use crate::docker::summary::ContainerSummary;

impl DockerOps for DockerClient {
    fn list_containers(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ContainerSummary>, DockerError>> + Send + '_>> {
        Box::pin(self.list_containers())
    }

    fn container_logs<'a>(
        &'a self,
        id: &'a str,
        tail: u32,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, DockerError>> + Send + 'a>> {
        Box::pin(self.container_logs(id, tail))
    }

    fn ping(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<(), DockerError>> + Send + '_>> {
        Box::pin(self.ping())
    }
}
