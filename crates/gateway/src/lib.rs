// Module structure for the Harborview Gateway.

// Core infrastructure
pub mod client;
pub mod config;
pub mod docker;
pub mod state;

// HTTP surface
pub mod http;
