// Seam between HTTP handlers and the Docker daemon.

pub mod docker;
pub mod fake;
pub mod live;

pub use docker::DockerOps;
