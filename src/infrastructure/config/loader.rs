//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "pokedex.yaml";

/// Prefix for environment overrides, nested keys split on `__`
pub const ENV_PREFIX: &str = "POKEDEX_";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];
const VALID_LOG_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `server.address` is not a socket address
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),

    /// A duration setting is zero
    #[error("Invalid {0}: must be greater than zero")]
    ZeroDuration(&'static str),

    /// An upstream base URL is blank
    #[error("{0} cannot be empty")]
    EmptyUrl(&'static str),

    /// Unknown `logging.level`
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown `logging.format`
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Unknown `logging.rotation`
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or `pokedex.yaml` in the working directory (optional)
    /// 3. Environment variables (`POKEDEX_*`, `__` separates nested keys)
    pub fn load(path: Option<&Path>) -> Result<Config> {
        Self::load_with_overrides(path, |_| {})
    }

    /// Like [`ConfigLoader::load`], with `overrides` (typically CLI flags)
    /// applied last, before validation.
    pub fn load_with_overrides(
        path: Option<&Path>,
        overrides: impl FnOnce(&mut Config),
    ) -> Result<Config> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if path.is_some() && !file.exists() {
            anyhow::bail!("Config file not found: {}", file.display());
        }

        let mut config: Config = Self::figment(file)
            .extract()
            .context("Failed to extract configuration from figment")?;
        overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidAddress(config.server.address.clone()));
        }
        if config.server.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("server.request_timeout_secs"));
        }
        if config.server.shutdown_timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("server.shutdown_timeout_secs"));
        }

        // A disabled cache never reads its durations.
        if config.cache.enabled {
            if config.cache.ttl_secs == 0 {
                return Err(ConfigError::ZeroDuration("cache.ttl_secs"));
            }
            if config.cache.cleanup_interval_secs == 0 {
                return Err(ConfigError::ZeroDuration("cache.cleanup_interval_secs"));
            }
        }

        if config.upstream.pokeapi_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("upstream.pokeapi_url"));
        }
        if config.upstream.funtranslations_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("upstream.funtranslations_url"));
        }
        if config.upstream.timeout_secs == 0 {
            return Err(ConfigError::ZeroDuration("upstream.timeout_secs"));
        }

        if !VALID_LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }
        if !VALID_LOG_FORMATS.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }
        if !VALID_LOG_ROTATIONS.contains(&config.logging.rotation.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
