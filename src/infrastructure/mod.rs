//! Infrastructure layer module
//!
//! Adapters and ambient plumbing:
//! - PokeAPI and FunTranslations HTTP clients
//! - Configuration management
//! - Logging infrastructure
//!
//! The HTTP clients satisfy the port traits defined in the domain layer.

pub mod config;
pub mod funtranslations;
pub mod http;
pub mod logging;
pub mod pokeapi;
