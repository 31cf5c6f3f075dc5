//! Common test utilities for integration tests
//!
//! Species payload fixtures, mockito helpers and service builders shared
//! by the integration test files.

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use pokedex::adapters::cache::{CachedSpeciesClient, CachedTranslator};
use pokedex::adapters::http::DynPokemonService;
use pokedex::domain::ports::{SpeciesClient, Translator};
use pokedex::infrastructure::funtranslations::{FunTranslationsClient, FunTranslationsClientConfig};
use pokedex::infrastructure::pokeapi::{PokeApiClient, PokeApiClientConfig};
use pokedex::PokemonService;

/// A PokeAPI `pokemon-species` body with a single English flavor text.
pub fn species_body(name: &str, habitat: &str, is_legendary: bool, description: &str) -> String {
    json!({
        "id": 150,
        "name": name,
        "is_legendary": is_legendary,
        "is_mythical": false,
        "habitat": { "name": habitat, "url": format!("https://pokeapi.co/api/v2/pokemon-habitat/{habitat}/") },
        "flavor_text_entries": [
            {
                "flavor_text": description,
                "language": { "name": "en", "url": "https://pokeapi.co/api/v2/language/9/" },
                "version": { "name": "red", "url": "https://pokeapi.co/api/v2/version/1/" }
            }
        ]
    })
    .to_string()
}

/// A FunTranslations success body.
pub fn translation_body(translated: &str) -> String {
    json!({
        "success": { "total": 1 },
        "contents": { "translated": translated, "text": "ignored", "translation": "ignored" }
    })
    .to_string()
}

/// The body FunTranslations sends once the hourly quota is used up.
pub fn rate_limit_body() -> String {
    json!({ "error": { "code": 429, "message": "Too Many Requests" } }).to_string()
}

/// Mock `GET /pokemon-species/{name}`.
pub async fn mock_species(server: &mut ServerGuard, name: &str, body: String) -> Mock {
    server
        .mock("GET", format!("/pokemon-species/{name}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Mock a successful `POST /translate/{style}.json` for exactly `text`.
pub async fn mock_translation(
    server: &mut ServerGuard,
    style: &str,
    text: &str,
    translated: &str,
) -> Mock {
    server
        .mock("POST", format!("/translate/{style}.json").as_str())
        .match_body(Matcher::Json(json!({ "text": text })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(translation_body(translated))
        .create_async()
        .await
}

/// Mock a rate-limited `POST /translate/{style}.json`.
pub async fn mock_rate_limited(server: &mut ServerGuard, style: &str) -> Mock {
    server
        .mock("POST", format!("/translate/{style}.json").as_str())
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(rate_limit_body())
        .create_async()
        .await
}

pub fn pokeapi_client(base_url: &str) -> Arc<PokeApiClient> {
    Arc::new(
        PokeApiClient::new(PokeApiClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .expect("Failed to create PokeAPI client"),
    )
}

pub fn funtranslations_client(base_url: &str) -> Arc<FunTranslationsClient> {
    Arc::new(
        FunTranslationsClient::new(FunTranslationsClientConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .expect("Failed to create FunTranslations client"),
    )
}

/// Service talking directly to the given upstreams.
pub fn direct_service(pokeapi_url: &str, funtranslations_url: &str) -> DynPokemonService {
    let species: Arc<dyn SpeciesClient> = pokeapi_client(pokeapi_url);
    let translator: Arc<dyn Translator> = funtranslations_client(funtranslations_url);
    PokemonService::new(species, translator)
}

/// Service with both upstreams behind caches.
pub fn cached_service(
    pokeapi_url: &str,
    funtranslations_url: &str,
    ttl: Duration,
) -> DynPokemonService {
    let sweep = Duration::from_secs(60);
    let species: Arc<dyn SpeciesClient> = Arc::new(CachedSpeciesClient::with_ttl(
        pokeapi_client(pokeapi_url),
        ttl,
        sweep,
    ));
    let translator: Arc<dyn Translator> = Arc::new(CachedTranslator::with_ttl(
        funtranslations_client(funtranslations_url),
        ttl,
        sweep,
    ));
    PokemonService::new(species, translator)
}

/// Setup test logging
///
/// Initializes a tracing subscriber writing to the test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
