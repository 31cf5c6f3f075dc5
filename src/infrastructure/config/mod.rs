//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Programmatic defaults
//! - YAML file loading
//! - `POKEDEX_*` environment overrides
//! - Validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
