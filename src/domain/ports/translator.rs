//! Text translation port.

use async_trait::async_trait;

use crate::domain::errors::UpstreamError;
use crate::domain::models::RequestContext;

/// Upstream source that rewrites a text into a named style.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `style`.
    ///
    /// Fails with [`UpstreamError::RateLimitExceeded`] when the upstream
    /// quota is exhausted and [`UpstreamError::UnsupportedStyle`] when
    /// `style` has no known endpoint.
    async fn translate(
        &self,
        ctx: &RequestContext,
        text: &str,
        style: &str,
    ) -> Result<String, UpstreamError>;
}
