//! Server configuration
//!
//! Values are read once at startup from the process environment (after
//! loading an optional `.env` file). Unset or unparseable variables fall back
//! to the defaults below.

use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ============================================================================
// Defaults
// ============================================================================

/// Default bind host.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default database URL for local development.
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/contacts";

/// Default maximum pool size.
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default minimum pool size.
pub const DEFAULT_DATABASE_MIN_CONNECTIONS: u32 = 2;

/// Default connection acquire timeout in seconds.
pub const DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default idle timeout in seconds (10 minutes).
pub const DEFAULT_DATABASE_IDLE_TIMEOUT_SECS: u64 = 600;

/// Default CORS origin for a locally served frontend.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Origins allowed to call the API from a browser.
///
/// `"*"` as the only entry allows any origin (credentials are then disabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Build a configuration from an arbitrary variable source.
    ///
    /// Does not validate; callers decide when to call [`Config::validate`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|raw| raw.trim().parse().ok())
        }

        Self {
            server: ServerConfig {
                host: lookup("CONTACTS_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
                port: parsed(&lookup, "CONTACTS_PORT").unwrap_or(DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: parsed(&lookup, "CONTACTS_SHUTDOWN_TIMEOUT")
                    .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parsed(&lookup, "DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
                min_connections: parsed(&lookup, "DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(DEFAULT_DATABASE_MIN_CONNECTIONS),
                connect_timeout_secs: parsed(&lookup, "DATABASE_CONNECT_TIMEOUT")
                    .unwrap_or(DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS),
                idle_timeout_secs: parsed(&lookup, "DATABASE_IDLE_TIMEOUT")
                    .unwrap_or(DEFAULT_DATABASE_IDLE_TIMEOUT_SECS),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect(),
                allow_credentials: parsed(&lookup, "CORS_ALLOW_CREDENTIALS").unwrap_or(true),
            },
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.database.url.is_empty() {
            anyhow::bail!("Database URL cannot be empty");
        }

        if self.database.max_connections == 0 {
            anyhow::bail!("Database max_connections must be greater than 0");
        }

        if self.database.min_connections > self.database.max_connections {
            anyhow::bail!(
                "Database min_connections ({}) cannot be greater than max_connections ({})",
                self.database.min_connections,
                self.database.max_connections
            );
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured, cross-origin requests will be rejected");
        }

        Ok(())
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| {
                format!("Invalid bind address {}:{}", self.server.host, self.server.port)
            })
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.server.shutdown_timeout_secs)
    }
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, DEFAULT_SERVER_HOST);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.database.max_connections, DEFAULT_DATABASE_MAX_CONNECTIONS);
        assert_eq!(config.cors.allowed_origins, vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTACTS_HOST", "0.0.0.0"),
            ("CONTACTS_PORT", "8080"),
            ("DATABASE_URL", "postgresql://db/contacts_test"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("CORS_ALLOW_CREDENTIALS", "false"),
        ]));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "postgresql://db/contacts_test");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.cors.allowed_origins, vec!["https://a.example", "https://b.example"]);
        assert!(!config.cors.allow_credentials);
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTACTS_PORT", "not-a-port"),
            ("DATABASE_IDLE_TIMEOUT", "-5"),
        ]));
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.database.idle_timeout_secs, DEFAULT_DATABASE_IDLE_TIMEOUT_SECS);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_database_url() {
        let mut config = Config::default();
        config.database.url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_pool_bounds() {
        let mut config = Config::default();
        config.database.max_connections = 0;
        config.database.min_connections = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.database.min_connections = 11;
        config.database.max_connections = 10;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("min_connections (11)"));
    }

    #[test]
    fn test_bind_addr_rejects_hostname() {
        let mut config = Config::default();
        config.server.host = "not a host".to_string();
        assert!(config.bind_addr().is_err());
    }
}
