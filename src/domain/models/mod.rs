//! Domain models.

pub mod config;
pub mod context;
pub mod pokemon;
pub mod translation;

pub use config::{CacheConfig, Config, LoggingConfig, ServerConfig, UpstreamConfig};
pub use context::RequestContext;
pub use pokemon::{
    sanitize_description, FlavorTextEntry, NamedResource, Pokemon, PokemonSpecies, CAVE_HABITAT,
    DESCRIPTION_LANGUAGE,
};
pub use translation::{Translation, TranslationStyle};
