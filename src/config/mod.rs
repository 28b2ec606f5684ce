// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest), e.g. `TRANSGATE_PROVIDERS__DEEPL__API_KEY`
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Same as [`AppConfig::load`], reading `path` instead of the default
    /// `~/.transgate/config.toml`. An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path.to_path_buf()).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            // Override with environment variables (prefix: TRANSGATE_)
            .add_source(
                Environment::with_prefix("TRANSGATE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| GatewayError::Config(e.to_string()))
    }

    /// Effective configuration as TOML. Credentials are redacted.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GatewayError::Internal(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".transgate")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}
