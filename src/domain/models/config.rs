//! Service configuration as read from file, env and flags.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for the Pokédex service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Inbound HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream response caching
    #[serde(default)]
    pub cache: CacheConfig,

    /// Upstream API endpoints
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inbound HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_address")]
    pub address: String,

    /// Deadline applied to each inbound request, upstream calls included
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Time allowed for in-flight requests to drain on shutdown
    #[serde(default = "default_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

fn default_address() -> String {
    "0.0.0.0:8080".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            request_timeout_secs: default_timeout_secs(),
            shutdown_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Per-request deadline.
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Grace period for in-flight requests on shutdown.
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Whether upstream clients are wrapped in caches
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Time-to-live of a cached upstream response
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,

    /// How often expired entries are swept from memory
    #[serde(default = "default_cache_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_cache_ttl_secs() -> u64 {
    60 * 60
}

const fn default_cache_cleanup_interval_secs() -> u64 {
    24 * 60 * 60
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            ttl_secs: default_cache_ttl_secs(),
            cleanup_interval_secs: default_cache_cleanup_interval_secs(),
        }
    }
}

impl CacheConfig {
    /// Entry lifetime.
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Period of the expired-entry sweep.
    pub const fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

/// Upstream API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpstreamConfig {
    /// PokeAPI base URL
    #[serde(default = "default_pokeapi_url")]
    pub pokeapi_url: String,

    /// FunTranslations base URL
    #[serde(default = "default_funtranslations_url")]
    pub funtranslations_url: String,

    /// Per-call HTTP client timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_pokeapi_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_funtranslations_url() -> String {
    "https://api.funtranslations.com".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pokeapi_url: default_pokeapi_url(),
            funtranslations_url: default_funtranslations_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rotated log files; stdout only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Log file rotation: daily, hourly, never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}
