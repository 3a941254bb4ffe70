use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `LISTEN_ADDR` falls back to `0.0.0.0:8080`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(AppError::ConfigErr)` - Missing or malformed variable
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "LISTEN_ADDR".to_string(),
                value: listen_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}
