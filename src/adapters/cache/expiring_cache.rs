//! Time-bounded, type-erased in-memory cache.
//!
//! Entries live for the cache-wide TTL unless a per-entry TTL is given on
//! insert. Reads never return an expired entry; a background janitor
//! periodically reclaims the memory of expired entries.

use moka::future::Cache;
use moka::Expiry;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, trace, warn};

/// A cached value. Readers downcast to the type they expect.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

/// A stored value together with the TTL it was inserted with.
#[derive(Clone)]
pub struct CacheEntry {
    /// Stored value
    pub value: CacheValue,
    /// Lifetime of this entry
    pub ttl: Duration,
    /// When the entry was written
    pub inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

/// Expires each entry after the TTL it carries.
struct PerEntryTtl;

impl Expiry<String, CacheEntry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Concurrent cache with per-entry expiration.
///
/// Cloning is cheap and every clone shares the same entries. The janitor
/// task stops once the last clone is dropped.
#[derive(Clone)]
pub struct ExpiringCache {
    entries: Cache<String, CacheEntry>,
    default_ttl: Duration,
    sweep_interval: Duration,
    _janitor: Arc<DropGuard>,
}

impl ExpiringCache {
    /// Create a cache whose entries live for `default_ttl` and whose expired
    /// entries are swept every `sweep_interval`.
    ///
    /// The janitor is spawned on the current tokio runtime. Without a
    /// runtime, or with a zero interval, no sweeping happens; reads still
    /// never observe expired entries.
    pub fn new(default_ttl: Duration, sweep_interval: Duration) -> Self {
        let entries = Cache::builder().expire_after(PerEntryTtl).build();

        let shutdown = CancellationToken::new();
        spawn_janitor(entries.clone(), sweep_interval, shutdown.clone());

        Self {
            entries,
            default_ttl,
            sweep_interval,
            _janitor: Arc::new(shutdown.drop_guard()),
        }
    }

    /// TTL applied when `set` is given none.
    pub const fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Period of the background sweep.
    pub const fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    /// Look up an unexpired entry.
    pub async fn get(&self, key: &str) -> Option<CacheValue> {
        let entry = self.entries.get(key).await?;
        if entry.is_expired() {
            return None;
        }
        Some(entry.value)
    }

    /// Insert or overwrite `key`. `ttl: None` uses the cache-wide TTL.
    pub async fn set(&self, key: impl Into<String>, value: CacheValue, ttl: Option<Duration>) {
        let entry = CacheEntry {
            value,
            ttl: ttl.unwrap_or(self.default_ttl),
            inserted_at: Instant::now(),
        };
        self.entries.insert(key.into(), entry).await;
    }

    /// Remove `key`; missing keys are ignored.
    pub async fn delete(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    /// Look up an entry and downcast it to `T`.
    ///
    /// An entry holding a different type is deleted and reported as a miss,
    /// so callers never see a type mismatch.
    pub async fn get_typed<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let value = self.get(key).await?;
        match value.downcast::<T>() {
            Ok(typed) => Some(typed),
            Err(_) => {
                warn!(key, expected = type_name::<T>(), "invalid cache entry, evicting");
                self.delete(key).await;
                None
            }
        }
    }

    /// Number of live entries, after applying pending evictions.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    #[cfg(test)]
    fn stored_entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

impl fmt::Debug for ExpiringCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("default_ttl", &self.default_ttl)
            .field("sweep_interval", &self.sweep_interval)
            .field("entries", &self.entries.entry_count())
            .finish_non_exhaustive()
    }
}

fn spawn_janitor(
    entries: Cache<String, CacheEntry>,
    sweep_interval: Duration,
    shutdown: CancellationToken,
) {
    if sweep_interval.is_zero() {
        debug!("cache sweep interval is zero, janitor disabled");
        return;
    }
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        debug!("no tokio runtime, cache janitor disabled");
        return;
    };

    runtime.spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                () = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    entries.run_pending_tasks().await;
                    trace!(remaining = entries.entry_count(), "cache sweep complete");
                }
            }
        }

        debug!("cache janitor stopped");
    });
}
