use std::net::SocketAddr;

use crate::error::config::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("{bind_addr:?} is not a valid socket address"),
            })?;

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            valkey_url: require_env("VALKEY_URL")?,
            bind_addr,
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
