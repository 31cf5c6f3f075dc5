//! Pokédex HTTP server.

use axum::{
    body::Body,
    extract::{Path, State},
    http::Request,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use super::error::ApiError;
use crate::domain::models::{Pokemon, RequestContext};
use crate::domain::ports::{SpeciesClient, Translator};
use crate::services::PokemonService;

const POKEMON_ERROR: &str = "unable to retrieve pokemon info";
const TRANSLATED_POKEMON_ERROR: &str = "unable to retrieve translated pokemon info";

/// Service with its clients chosen at startup.
pub type DynPokemonService = PokemonService<dyn SpeciesClient, dyn Translator>;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    /// Address to bind to.
    pub address: SocketAddr,
    /// Deadline for a single request, upstream calls included.
    pub request_timeout: Duration,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout: Duration,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(10),
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// HTTP status code, always 200
    pub status: u16,
    /// Human-readable health state
    pub healthy: String,
}

struct AppState {
    service: DynPokemonService,
    request_timeout: Duration,
}

impl AppState {
    fn context(&self) -> RequestContext {
        RequestContext::with_timeout(self.request_timeout)
    }
}

/// Build the router.
pub fn build_router(service: DynPokemonService, request_timeout: Duration) -> Router {
    let state = Arc::new(AppState {
        service,
        request_timeout,
    });

    Router::new()
        .route("/v1/health", get(health_check))
        .route("/v1/pokemon/{name}", get(get_pokemon))
        .route("/v1/pokemon/translated/{name}", get(get_translated_pokemon))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

/// Pokédex HTTP server.
pub struct HttpServer {
    config: HttpServerConfig,
    service: DynPokemonService,
}

impl HttpServer {
    /// Create a server around `service`.
    pub fn new(service: DynPokemonService, config: HttpServerConfig) -> Self {
        Self { config, service }
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    ///
    /// Draining is bounded by `shutdown_timeout`; connections still open
    /// after that are dropped.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.address).await?;
        info!("Pokédex HTTP server listening on {}", listener.local_addr()?);
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.service, self.config.request_timeout);
        let shutdown_timeout = self.config.shutdown_timeout;

        let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
        let graceful = async move {
            shutdown.await;
            info!("shutdown signal received, draining connections");
            let _ = signalled_tx.send(());
        };

        let server = axum::serve(listener, router)
            .with_graceful_shutdown(graceful)
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => result?,
            () = async {
                if signalled_rx.await.is_ok() {
                    tokio::time::sleep(shutdown_timeout).await;
                } else {
                    std::future::pending::<()>().await;
                }
            } => {
                warn!(
                    timeout_secs = shutdown_timeout.as_secs(),
                    "graceful shutdown timed out, dropping open connections"
                );
            }
        }

        info!("Pokédex HTTP server stopped");
        Ok(())
    }
}

// Handler functions

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: 200,
        healthy: "OK".to_string(),
    })
}

async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, ApiError> {
    let ctx = state.context();
    state
        .service
        .get_pokemon(&ctx, &name)
        .await
        .map(Json)
        .map_err(|e| {
            error!(pokemon = %name, error = %e, "failed to retrieve pokemon");
            ApiError::from_domain(&e, POKEMON_ERROR)
        })
}

async fn get_translated_pokemon(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Pokemon>, ApiError> {
    let ctx = state.context();
    state
        .service
        .get_translated_pokemon(&ctx, &name)
        .await
        .map(Json)
        .map_err(|e| {
            error!(pokemon = %name, error = %e, "failed to retrieve translated pokemon");
            ApiError::from_domain(&e, TRANSLATED_POKEMON_ERROR)
        })
}
