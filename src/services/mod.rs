//! Service layer.

pub mod pokemon_service;

pub use pokemon_service::PokemonService;
