//! Port trait definitions (Hexagonal Architecture)
//!
//! The service depends on these traits only; the HTTP clients in
//! `infrastructure` and the caching decorators in `adapters::cache`
//! implement them.

pub mod species_client;
pub mod translator;

pub use species_client::SpeciesClient;
pub use translator::Translator;
