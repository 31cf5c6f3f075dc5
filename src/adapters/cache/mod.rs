//! In-memory caching layer for upstream lookups.
//!
//! `ExpiringCache` is a TTL cache built on `moka`; the decorators wrap the
//! upstream client ports so the service never knows whether it is talking
//! to a cache or to the network.

pub mod cached_species_client;
pub mod cached_translator;
pub mod expiring_cache;

pub use cached_species_client::CachedSpeciesClient;
pub use cached_translator::CachedTranslator;
pub use expiring_cache::{CacheEntry, CacheValue, ExpiringCache};
