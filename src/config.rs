//! Configuration module for IAIQ.

use serde::Deserialize;
use std::path::Path;

use crate::auth::key::MIN_SECRET_LENGTH;
use crate::{IaiqError, Result};

/// Environment variable overriding `jwt.secret.key`.
pub const JWT_SECRET_ENV: &str = "IAIQ_JWT_SECRET_KEY";

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "data/iaiq.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/iaiq.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// `[jwt.secret]` table.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JwtSecretConfig {
    /// HMAC-SHA256 secret. Must be at least 32 bytes.
    #[serde(default)]
    pub key: String,
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JwtConfig {
    /// Signing secret.
    #[serde(default)]
    pub secret: JwtSecretConfig,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// JWT configuration.
    #[serde(default)]
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(IaiqError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| IaiqError::Configuration(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `IAIQ_JWT_SECRET_KEY`: Override `jwt.secret.key`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(secret) = std::env::var(JWT_SECRET_ENV) {
            if !secret.is_empty() {
                self.jwt.secret.key = secret;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// The JWT secret must be present and long enough for HS256.
    pub fn validate(&self) -> Result<()> {
        let key = &self.jwt.secret.key;
        if key.is_empty() {
            return Err(IaiqError::Configuration(format!(
                "jwt.secret.key is not set. Set it in config.toml or via {JWT_SECRET_ENV}."
            )));
        }
        if key.len() < MIN_SECRET_LENGTH {
            return Err(IaiqError::Configuration(format!(
                "jwt.secret.key must be at least {MIN_SECRET_LENGTH} bytes"
            )));
        }
        Ok(())
    }
}
