//! Console configuration — where to find the gateway.

const DEFAULT_API_URL: &str = "http://127.0.0.1:4000/api";

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the gateway API, without a trailing slash.
    pub api_base_url: String,
}

impl ConsoleConfig {
    /// Read configuration from the environment (`.env` honored).
    /// Defaults to the gateway's default local address.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = std::env::var("CONSOLE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self { api_base_url }
    }
}
