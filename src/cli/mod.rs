//! Command-line interface.
//!
//! Every flag is optional: an absent flag leaves the value loaded from the
//! config file and environment untouched.

use clap::Parser;
use std::path::PathBuf;

use crate::domain::models::Config;

/// Command-line flags; each one overrides its config key.
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Pokédex HTTP service backed by PokeAPI and FunTranslations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML config file [default: pokedex.yaml]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on [default: 0.0.0.0:8080]
    #[arg(long)]
    pub address: Option<String>,

    /// Per-request deadline in seconds, upstream calls included [default: 10]
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Graceful shutdown timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    pub shutdown_timeout_secs: Option<u64>,

    /// Disable caching of upstream responses
    #[arg(long)]
    pub disable_cache: bool,

    /// Cache entry time-to-live in seconds [default: 3600]
    #[arg(long, value_name = "SECS")]
    pub cache_ttl_secs: Option<u64>,

    /// Interval between sweeps of expired cache entries in seconds [default: 86400]
    #[arg(long, value_name = "SECS")]
    pub cache_cleanup_interval_secs: Option<u64>,

    /// PokeAPI base URL [default: https://pokeapi.co/api/v2]
    #[arg(long, value_name = "URL")]
    pub pokeapi_url: Option<String>,

    /// FunTranslations base URL [default: https://api.funtranslations.com]
    #[arg(long, value_name = "URL")]
    pub funtranslations_url: Option<String>,

    /// Log level: trace, debug, info, warn, error [default: info]
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format: json, pretty [default: json]
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log file rotation: daily, hourly, never [default: daily]
    #[arg(long)]
    pub log_rotation: Option<String>,
}

impl Cli {
    /// Overlay the flags that were given onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(address) = &self.address {
            config.server.address.clone_from(address);
        }
        if let Some(secs) = self.request_timeout_secs {
            config.server.request_timeout_secs = secs;
        }
        if let Some(secs) = self.shutdown_timeout_secs {
            config.server.shutdown_timeout_secs = secs;
        }
        if self.disable_cache {
            config.cache.enabled = false;
        }
        if let Some(secs) = self.cache_ttl_secs {
            config.cache.ttl_secs = secs;
        }
        if let Some(secs) = self.cache_cleanup_interval_secs {
            config.cache.cleanup_interval_secs = secs;
        }
        if let Some(url) = &self.pokeapi_url {
            config.upstream.pokeapi_url.clone_from(url);
        }
        if let Some(url) = &self.funtranslations_url {
            config.upstream.funtranslations_url.clone_from(url);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(format) = &self.log_format {
            config.logging.format.clone_from(format);
        }
        if let Some(rotation) = &self.log_rotation {
            config.logging.rotation.clone_from(rotation);
        }
    }
}
