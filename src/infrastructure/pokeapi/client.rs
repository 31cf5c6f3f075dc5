//! PokeAPI species client.

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::domain::errors::UpstreamError;
use crate::domain::models::{PokemonSpecies, RequestContext};
use crate::domain::ports::SpeciesClient;
use crate::infrastructure::http::{build_http_client, endpoint, ensure_ok, parse_base_url};

/// Configuration for the PokeAPI HTTP client
#[derive(Debug, Clone)]
pub struct PokeApiClientConfig {
    /// Base URL of the PokeAPI, including the version prefix
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PokeApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the PokeAPI species endpoint
pub struct PokeApiClient {
    http_client: ReqwestClient,
    base_url: Url,
}

impl PokeApiClient {
    /// Create a new PokeAPI client
    ///
    /// # Example
    /// ```no_run
    /// use pokedex::infrastructure::pokeapi::{PokeApiClient, PokeApiClientConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = PokeApiClient::new(PokeApiClientConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: PokeApiClientConfig) -> Result<Self, UpstreamError> {
        info!(
            "Initializing PokeAPI client: base_url={}, timeout={}s",
            config.base_url, config.timeout_secs
        );

        Ok(Self {
            http_client: build_http_client(Duration::from_secs(config.timeout_secs))?,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    async fn fetch_species(&self, name: &str) -> Result<PokemonSpecies, UpstreamError> {
        let url = endpoint(&self.base_url, &["pokemon-species", name])?;
        debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;
        let species = ensure_ok(response).await?.json::<PokemonSpecies>().await?;

        Ok(species)
    }
}

#[async_trait]
impl SpeciesClient for PokeApiClient {
    #[instrument(skip(self, ctx), fields(upstream = "pokeapi"))]
    async fn get_species(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<PokemonSpecies, UpstreamError> {
        ctx.run(self.fetch_species(name)).await
    }
}
