//! Shared reqwest plumbing for the upstream clients.

use reqwest::{Client as ReqwestClient, Response, StatusCode, Url};
use std::time::Duration;
use tracing::warn;

use crate::domain::errors::UpstreamError;

/// Build a pooled HTTP client with a per-request timeout.
pub fn build_http_client(timeout: Duration) -> Result<ReqwestClient, UpstreamError> {
    ReqwestClient::builder()
        .pool_max_idle_per_host(10)
        .timeout(timeout)
        .tcp_nodelay(true)
        .build()
        .map_err(UpstreamError::from)
}

/// Parse a configured base URL.
pub fn parse_base_url(base_url: &str) -> Result<Url, UpstreamError> {
    let url = Url::parse(base_url)
        .map_err(|e| UpstreamError::InvalidUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(UpstreamError::InvalidUrl(base_url.to_string()));
    }
    Ok(url)
}

/// Append percent-encoded path segments to `base`.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| UpstreamError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Turn anything but `200 OK` into an upstream error.
pub async fn ensure_ok(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error body".to_string());
    warn!(status = status.as_u16(), body = %body, "upstream returned an error");

    Err(UpstreamError::from_status(status.as_u16()))
}
