//! FunTranslations HTTP client.

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::domain::errors::UpstreamError;
use crate::domain::models::{RequestContext, TranslationStyle};
use crate::domain::ports::Translator;
use crate::infrastructure::http::{build_http_client, endpoint, ensure_ok, parse_base_url};

/// Configuration for the FunTranslations HTTP client
#[derive(Debug, Clone)]
pub struct FunTranslationsClientConfig {
    /// Base URL of the FunTranslations API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FunTranslationsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.funtranslations.com".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    contents: TranslationContents,
}

#[derive(Debug, Deserialize)]
struct TranslationContents {
    translated: String,
}

/// HTTP client for the FunTranslations API
pub struct FunTranslationsClient {
    http_client: ReqwestClient,
    base_url: Url,
}

impl FunTranslationsClient {
    /// Build a client, failing on an unparsable base URL.
    pub fn new(config: FunTranslationsClientConfig) -> Result<Self, UpstreamError> {
        info!(
            "Initializing FunTranslations client: base_url={}, timeout={}s",
            config.base_url, config.timeout_secs
        );

        Ok(Self {
            http_client: build_http_client(Duration::from_secs(config.timeout_secs))?,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    /// Endpoint serving `style`.
    pub fn endpoint_for(&self, style: TranslationStyle) -> Result<Url, UpstreamError> {
        let file = match style {
            TranslationStyle::Yoda => "yoda.json",
            TranslationStyle::Shakespeare => "shakespeare.json",
        };
        endpoint(&self.base_url, &["translate", file])
    }

    async fn request_translation(
        &self,
        text: &str,
        style: TranslationStyle,
    ) -> Result<String, UpstreamError> {
        let url = self.endpoint_for(style)?;
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .json(&TranslationRequest { text })
            .send()
            .await?;
        let translation = ensure_ok(response)
            .await?
            .json::<TranslationResponse>()
            .await?;

        Ok(translation.contents.translated)
    }
}

#[async_trait]
impl Translator for FunTranslationsClient {
    #[instrument(skip(self, ctx, text), fields(upstream = "funtranslations"))]
    async fn translate(
        &self,
        ctx: &RequestContext,
        text: &str,
        style: &str,
    ) -> Result<String, UpstreamError> {
        let style = style.parse::<TranslationStyle>()?;
        ctx.run(self.request_translation(text, style)).await
    }
}
