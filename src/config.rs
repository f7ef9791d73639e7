//! Service configuration.
//!
//! Loaded from a JSON file with per-field defaults; a missing file
//! falls back to the defaults entirely. The `PORT` and `DATABASE_URL`
//! environment variables override the file, matching the deployment
//! convention the service inherited.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {name} override: {value:?}")]
    InvalidOverride { name: &'static str, value: String },
}

/// Top-level service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL connection URL
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    "mysql://root@localhost:3306/geoschool".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, then apply env overrides.
    ///
    /// A missing file is not an error; the defaults apply.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let mut config = if path.exists() {
            serde_json::from_str(&fs::read_to_string(path)?)?
        } else {
            Config::default()
        };

        config.apply_overrides(env::var("PORT").ok(), env::var("DATABASE_URL").ok())?;
        Ok(config)
    }

    /// Apply environment-style overrides.
    fn apply_overrides(
        &mut self,
        port: Option<String>,
        database_url: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = port {
            self.http.port = raw.parse().map_err(|_| ConfigError::InvalidOverride {
                name: "PORT",
                value: raw,
            })?;
        }
        if let Some(url) = database_url {
            self.database.url = url;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.database.url, "mysql://root@localhost:3306/geoschool");
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let config: Config =
            serde_json::from_str("{\"http\": {\"port\": 8123}}").unwrap();
        assert_eq!(config.http.port, 8123);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.database.url, default_database_url());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let mut config = Config::default();
        config
            .apply_overrides(
                Some("9000".to_string()),
                Some("mysql://db.internal:3306/schools".to_string()),
            )
            .unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.database.url, "mysql://db.internal:3306/schools");
    }

    #[test]
    fn test_garbage_port_override_is_an_error() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(Some("not-a-port".to_string()), None)
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/geoschool.json")).unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
    }
}
