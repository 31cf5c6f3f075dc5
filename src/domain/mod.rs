//! Domain layer for the Pokédex service
//!
//! Models, errors, and the ports the service talks to.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult, UpstreamError};
