//! Cached wrapper for `SpeciesClient`.
//!
//! Successful species lookups are memoized under `pokeapi:species:<name>`
//! for the cache TTL. Failures are never cached.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::expiring_cache::ExpiringCache;
use crate::domain::errors::UpstreamError;
use crate::domain::models::{PokemonSpecies, RequestContext};
use crate::domain::ports::SpeciesClient;

const KEY_PREFIX: &str = "pokeapi:species:";

/// Cached species client decorator.
///
/// Wraps any `SpeciesClient` so repeated lookups of the same species within
/// one TTL window reach the upstream at most once.
pub struct CachedSpeciesClient<C: SpeciesClient> {
    inner: Arc<C>,
    cache: ExpiringCache,
}

impl<C: SpeciesClient> CachedSpeciesClient<C> {
    /// Wrap `inner` with an existing cache.
    pub fn new(inner: Arc<C>, cache: ExpiringCache) -> Self {
        Self { inner, cache }
    }

    /// Wrap `inner` with a dedicated cache.
    pub fn with_ttl(inner: Arc<C>, ttl: Duration, sweep_interval: Duration) -> Self {
        Self::new(inner, ExpiringCache::new(ttl, sweep_interval))
    }

    /// Key under which the species `name` is stored.
    pub fn cache_key(name: &str) -> String {
        format!("{KEY_PREFIX}{name}")
    }
}

#[async_trait]
impl<C: SpeciesClient + 'static> SpeciesClient for CachedSpeciesClient<C> {
    async fn get_species(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<PokemonSpecies, UpstreamError> {
        let key = Self::cache_key(name);

        if let Some(cached) = self.cache.get_typed::<PokemonSpecies>(&key).await {
            debug!(key = %key, "species cache hit");
            return Ok((*cached).clone());
        }

        debug!(key = %key, "species cache miss");
        let species = self.inner.get_species(ctx, name).await?;
        self.cache.set(key, Arc::new(species.clone()), None).await;
        Ok(species)
    }
}
