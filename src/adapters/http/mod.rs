//! Inbound HTTP surface.
//!
//! `/v1/health`, `/v1/pokemon/{name}` and `/v1/pokemon/translated/{name}`
//! served with axum.

pub mod error;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use server::{build_router, DynPokemonService, HttpServer, HttpServerConfig};
