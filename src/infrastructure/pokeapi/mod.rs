//! PokeAPI species client.

pub mod client;

pub use client::{PokeApiClient, PokeApiClientConfig};
