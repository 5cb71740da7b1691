use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub docker: DockerConfig,
    pub logs: LogTailConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DockerConfig {
    /// Path to the Docker management socket. Empty means the platform
    /// default (`/var/run/docker.sock` on Linux).
    pub socket_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogTailConfig {
    /// Lines of combined output served when the request does not say.
    pub tail_lines: u32,
    /// Upper bound for a per-request `?tail=` override.
    pub max_tail_lines: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl GatewayConfig {
    /// Load configuration from gateway.toml and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        // Start with compile-time defaults as the foundation so a key
        // missing from files/env falls back instead of erroring.
        let defaults = config::Config::try_from(&GatewayConfig::default())
            .context("Failed to serialize default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        // Layer config files (overrides defaults). Tried in order:
        // 1. /etc/harborview/gateway.toml (production)
        // 2. config/gateway.toml (local development)
        // 3. crates/gateway/config/gateway.toml (workspace root)
        let config_paths = vec![
            "/etc/harborview/gateway",
            "config/gateway",
            "crates/gateway/config/gateway",
        ];

        for path in config_paths {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Layer environment variables (overrides everything).
        // Double underscore for nested keys: GATEWAY_SERVER__BIND_ADDRESS
        builder = builder.add_source(
            config::Environment::with_prefix("GATEWAY")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind_address
            .parse::<std::net::SocketAddr>()
            .context("Invalid bind_address")?;

        if self.logs.tail_lines == 0 {
            anyhow::bail!("logs.tail_lines must be at least 1");
        }
        if self.logs.max_tail_lines < self.logs.tail_lines {
            anyhow::bail!(
                "logs.max_tail_lines ({}) must not be below logs.tail_lines ({})",
                self.logs.max_tail_lines,
                self.logs.tail_lines
            );
        }

        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "0.0.0.0:4000".to_string(),
                request_timeout_secs: 30,
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:19006".to_string(),
                ],
            },
            docker: DockerConfig {
                socket_path: String::new(),
            },
            logs: LogTailConfig {
                tail_lines: 10,
                max_tail_lines: 1000,
            },
            logging: LoggingConfig {
                level: "info,gateway=debug".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}
