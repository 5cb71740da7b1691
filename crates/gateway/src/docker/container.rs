//! Container queries — list and log tail.

use super::client::{DockerClient, DockerError};
use super::summary::ContainerSummary;

use bollard::container::LogOutput;
use bollard::query_parameters::{ListContainersOptions, LogsOptions};
use futures_util::stream::StreamExt;

impl DockerClient {
    /// List all containers, including stopped ones, projected into the
    /// gateway's wire shape. Order is whatever the daemon reports.
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DockerError> {
        let options = Some(ListContainersOptions {
            all: true,
            ..Default::default()
        });
        let containers = self.client.list_containers(options).await?;
        Ok(containers.into_iter().map(|c| c.into()).collect())
    }

    /// Fetch the combined stdout+stderr tail for one container as raw text.
    ///
    /// The daemon performs the truncation: `tail` is passed straight through
    /// as the number of most-recent lines to return. Any error mid-stream
    /// aborts the fetch; there is no partial result.
    pub async fn container_logs(&self, id: &str, tail: u32) -> Result<String, DockerError> {
        let options = LogsOptions {
            follow: false,
            stdout: true,
            stderr: true,
            since: 0,
            until: 0,
            timestamps: false,
            tail: tail.to_string(),
        };

        let mut stream = self.client.logs(id, Some(options));
        let mut text = String::new();

        while let Some(chunk) = stream.next().await {
            let output = chunk.map_err(|e| map_container_error(id, e))?;
            let message = match output {
                LogOutput::StdOut { message } => message,
                LogOutput::StdErr { message } => message,
                LogOutput::StdIn { message } => message,
                LogOutput::Console { message } => message,
            };
            text.push_str(&String::from_utf8_lossy(&message));
        }

        Ok(text)
    }
}

/// Bollard reports an unknown container id as a 404 server error.
fn map_container_error(id: &str, err: bollard::errors::Error) -> DockerError {
    match err {
        bollard::errors::Error::DockerResponseServerError {
            status_code: 404, ..
        } => DockerError::ContainerNotFound(id.to_string()),
        other => DockerError::Daemon(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_404_to_container_not_found() {
        let err = bollard::errors::Error::DockerResponseServerError {
            status_code: 404,
            message: "No such container: abc".to_string(),
        };
        match map_container_error("abc", err) {
            DockerError::ContainerNotFound(id) => assert_eq!(id, "abc"),
            other => panic!("expected ContainerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_map_other_server_error_to_daemon() {
        let err = bollard::errors::Error::DockerResponseServerError {
            status_code: 500,
            message: "driver failure".to_string(),
        };
        match map_container_error("abc", err) {
            DockerError::Daemon(_) => {}
            other => panic!("expected Daemon, got {other:?}"),
        }
    }
}
