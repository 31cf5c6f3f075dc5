//! Species lookup port.

use async_trait::async_trait;

use crate::domain::errors::UpstreamError;
use crate::domain::models::{PokemonSpecies, RequestContext};

/// Upstream source of species records.
///
/// Implemented by the PokeAPI HTTP client and by the caching decorator
/// wrapping it; the service only ever sees this trait.
#[async_trait]
pub trait SpeciesClient: Send + Sync {
    /// Look up a species by name.
    ///
    /// Must return promptly with [`UpstreamError::Cancelled`] or
    /// [`UpstreamError::Timeout`] once `ctx` is cancelled or past its deadline.
    async fn get_species(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<PokemonSpecies, UpstreamError>;
}
