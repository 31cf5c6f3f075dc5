//! Pokédex - Pokémon descriptions, optionally translated
//!
//! Looks up Pokémon species on PokeAPI and, on request, rewrites their
//! description through FunTranslations (Yoda for legendary or cave
//! Pokémon, Shakespeare otherwise).
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and the upstream ports
//! - **Service Layer** (`services`): Record composition and translation policy
//! - **Adapters** (`adapters`): TTL cache decorators and the HTTP surface
//! - **Infrastructure Layer** (`infrastructure`): Upstream HTTP clients, config, logging
//! - **Application Layer** (`application`): Startup wiring and shutdown
//! - **CLI Layer** (`cli`): Command-line flags
//!
//! # Example
//!
//! ```no_run
//! use pokedex::application::build_service;
//! use pokedex::domain::models::{Config, RequestContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = build_service(&Config::default())?;
//!     let pokemon = service
//!         .get_translated_pokemon(&RequestContext::background(), "mewtwo")
//!         .await?;
//!     println!("{}", pokemon.description);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachedSpeciesClient, CachedTranslator, ExpiringCache};
pub use domain::models::{Config, Pokemon, PokemonSpecies, RequestContext, Translation, TranslationStyle};
pub use domain::ports::{SpeciesClient, Translator};
pub use domain::{DomainError, DomainResult, UpstreamError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::PokemonService;
