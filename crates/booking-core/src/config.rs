//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use tracing::{debug, warn};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Comma-separated list of allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_timeout() -> u64 {
    30
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

/// Database configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Idle connection timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

/// Authentication configuration
///
/// Token lifetime is decided by the issuing service, only the secret is
/// needed here.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// JWT signing secret, shared with the service that issues tokens
    pub jwt_secret: String,
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("server.timeout_secs", 30)?
            .set_default("server.cors_origins", default_cors_origins())?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("database.idle_timeout_secs", 600)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with BOOKING_ prefix
            .add_source(
                Environment::with_prefix("BOOKING")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize().map_err(|e| {
            warn!("Invalid configuration for run mode {}: {}", run_mode, e);
            e
        })?;
        config.validate()?;

        debug!("Configuration loaded for run mode {}", run_mode);
        Ok(config)
    }

    /// Reject values that deserialize but cannot work
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` for a blank database URL or JWT secret,
    /// or a pool whose minimum exceeds its maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let problem = if self.database.url.trim().is_empty() {
            Some("database.url must not be empty".to_string())
        } else if self.auth.jwt_secret.trim().is_empty() {
            Some("auth.jwt_secret must not be empty".to_string())
        } else if self.database.min_connections > self.database.max_connections {
            Some(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            ))
        } else {
            None
        };

        match problem {
            Some(msg) => {
                warn!("Rejecting configuration: {}", msg);
                Err(ConfigError::Message(msg))
            }
            None => Ok(()),
        }
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Allowed CORS origins, trimmed and without empty entries
    pub fn cors_origins(&self) -> Vec<String> {
        self.server
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            [database]
            url = "postgresql://localhost/booking"
            [auth]
            jwt_secret = "secret"
            "#,
        );

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 2);
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_cors_origins_parsing() {
        let config = from_toml(
            r#"
            [server]
            cors_origins = "http://a.test, ,http://b.test "
            [database]
            url = "postgresql://localhost/booking"
            [auth]
            jwt_secret = "secret"
            "#,
        );

        assert_eq!(
            config.cors_origins(),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    fn valid() -> AppConfig {
        from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            [database]
            url = "postgresql://localhost/booking"
            [auth]
            jwt_secret = "secret"
            "#,
        )
    }

    #[test]
    fn test_validate_rejects_blank_secret() {
        let mut config = valid();
        config.auth.jwt_secret = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("auth.jwt_secret"));
    }

    #[test]
    fn test_validate_rejects_blank_database_url() {
        let mut config = valid();
        config.database.url = String::new();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.url"));
    }

    #[test]
    fn test_validate_rejects_inverted_pool_bounds() {
        let mut config = valid();
        config.database.min_connections = 20;
        config.database.max_connections = 5;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_connections"));
    }
}
