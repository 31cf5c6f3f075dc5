//! Cached wrapper for `Translator`.
//!
//! Keys combine the style and the exact input text, so the same text in two
//! styles, or two texts in one style, are independent entries.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::expiring_cache::ExpiringCache;
use crate::domain::errors::UpstreamError;
use crate::domain::models::RequestContext;
use crate::domain::ports::Translator;

const KEY_PREFIX: &str = "translation:";

/// Cached translator decorator.
pub struct CachedTranslator<T: Translator> {
    inner: Arc<T>,
    cache: ExpiringCache,
}

impl<T: Translator> CachedTranslator<T> {
    /// Wrap `inner` with an existing cache.
    pub fn new(inner: Arc<T>, cache: ExpiringCache) -> Self {
        Self { inner, cache }
    }

    /// Wrap `inner` with a dedicated cache.
    pub fn with_ttl(inner: Arc<T>, ttl: Duration, sweep_interval: Duration) -> Self {
        Self::new(inner, ExpiringCache::new(ttl, sweep_interval))
    }

    /// Key under which the translation of `text` in `style` is stored.
    pub fn cache_key(text: &str, style: &str) -> String {
        format!("{KEY_PREFIX}{style}:{text}")
    }
}

#[async_trait]
impl<T: Translator + 'static> Translator for CachedTranslator<T> {
    async fn translate(
        &self,
        ctx: &RequestContext,
        text: &str,
        style: &str,
    ) -> Result<String, UpstreamError> {
        let key = Self::cache_key(text, style);

        if let Some(cached) = self.cache.get_typed::<String>(&key).await {
            debug!(style, "translation cache hit");
            return Ok((*cached).clone());
        }

        debug!(style, "translation cache miss");
        let translated = self.inner.translate(ctx, text, style).await?;
        self.cache.set(key, Arc::new(translated.clone()), None).await;
        Ok(translated)
    }
}
