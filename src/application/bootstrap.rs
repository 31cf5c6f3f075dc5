//! Wires config, clients, caches and the HTTP server together.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::adapters::cache::{CachedSpeciesClient, CachedTranslator};
use crate::adapters::http::{DynPokemonService, HttpServer, HttpServerConfig};
use crate::domain::errors::UpstreamError;
use crate::domain::models::Config;
use crate::domain::ports::{SpeciesClient, Translator};
use crate::infrastructure::funtranslations::{FunTranslationsClient, FunTranslationsClientConfig};
use crate::infrastructure::pokeapi::{PokeApiClient, PokeApiClientConfig};
use crate::services::PokemonService;

/// Build the service, caching both upstreams unless caching is disabled.
///
/// Each decorator owns its own cache. Must be called inside a tokio
/// runtime for the cache janitors to start.
pub fn build_service(config: &Config) -> Result<DynPokemonService, UpstreamError> {
    let pokeapi = Arc::new(PokeApiClient::new(PokeApiClientConfig {
        base_url: config.upstream.pokeapi_url.clone(),
        timeout_secs: config.upstream.timeout_secs,
    })?);
    let funtranslations = Arc::new(FunTranslationsClient::new(FunTranslationsClientConfig {
        base_url: config.upstream.funtranslations_url.clone(),
        timeout_secs: config.upstream.timeout_secs,
    })?);

    let species: Arc<dyn SpeciesClient>;
    let translator: Arc<dyn Translator>;
    if config.cache.enabled {
        let ttl = config.cache.ttl();
        let sweep = config.cache.cleanup_interval();
        info!(
            ttl_secs = config.cache.ttl_secs,
            cleanup_interval_secs = config.cache.cleanup_interval_secs,
            "upstream caching enabled"
        );
        species = Arc::new(CachedSpeciesClient::with_ttl(pokeapi, ttl, sweep));
        translator = Arc::new(CachedTranslator::with_ttl(funtranslations, ttl, sweep));
    } else {
        info!("upstream caching disabled");
        species = pokeapi;
        translator = funtranslations;
    }

    Ok(PokemonService::new(species, translator))
}

/// Serve until SIGINT or SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let address: SocketAddr = config
        .server
        .address
        .parse()
        .with_context(|| format!("Invalid server address: {}", config.server.address))?;

    let service = build_service(&config).context("Failed to build upstream clients")?;

    let server = HttpServer::new(
        service,
        HttpServerConfig {
            address,
            request_timeout: config.server.request_timeout(),
            shutdown_timeout: config.server.shutdown_timeout(),
        },
    );

    server.serve_with_shutdown(shutdown_signal()).await
}

/// Resolves on the first SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT"),
        () = terminate => info!("received SIGTERM"),
    }
}
