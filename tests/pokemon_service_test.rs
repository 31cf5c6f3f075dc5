//! End-to-end tests for `PokemonService` over real HTTP clients
//!
//! Test coverage:
//! - Translation style selection (cave, legendary, both, neither)
//! - Fallback to the original description when translation fails
//! - Not-found versus upstream-unavailable
//! - Caching: one upstream call per species and per (text, style)

mod common;

use mockito::Server;
use std::time::Duration;

use pokedex::{DomainError, Pokemon, RequestContext, UpstreamError};

struct Case {
    name: &'static str,
    habitat: &'static str,
    is_legendary: bool,
    description: &'static str,
    /// Style the service must ask for, and its translation (`None` means rate limited).
    style: &'static str,
    translation: Option<&'static str>,
}

const CASES: [Case; 5] = [
    Case {
        name: "zubat",
        habitat: "cave",
        is_legendary: false,
        description: "Original description for cave Pokemon",
        style: "yoda",
        translation: Some("Yoda translation for cave Pokemon, this is"),
    },
    Case {
        name: "mewtwo",
        habitat: "rare",
        is_legendary: true,
        description: "Original description for legendary Pokemon",
        style: "yoda",
        translation: Some("Yoda translation for legendary Pokemon, this is"),
    },
    Case {
        name: "registeel",
        habitat: "cave",
        is_legendary: true,
        description: "Original description for cave legendary Pokemon",
        style: "yoda",
        translation: Some("Yoda translation for cave legendary Pokemon, this is"),
    },
    Case {
        name: "pikachu",
        habitat: "forest",
        is_legendary: false,
        description: "Original description for normal Pokemon",
        style: "shakespeare",
        translation: Some("Shakespeare translation for normal Pokemon"),
    },
    Case {
        name: "eevee",
        habitat: "urban",
        is_legendary: false,
        description: "Original description for failed translation",
        style: "shakespeare",
        translation: None,
    },
];

#[tokio::test]
async fn test_translation_style_table() {
    for case in &CASES {
        let mut pokeapi = Server::new_async().await;
        let mut funtranslations = Server::new_async().await;

        let _species = common::mock_species(
            &mut pokeapi,
            case.name,
            common::species_body(case.name, case.habitat, case.is_legendary, case.description),
        )
        .await;
        let translation_mock = match case.translation {
            Some(translated) => {
                common::mock_translation(&mut funtranslations, case.style, case.description, translated)
                    .await
            }
            None => common::mock_rate_limited(&mut funtranslations, case.style).await,
        };

        let service = common::direct_service(&pokeapi.url(), &funtranslations.url());
        let ctx = RequestContext::background();

        let plain = service.get_pokemon(&ctx, case.name).await.unwrap();
        assert_eq!(
            plain,
            Pokemon {
                name: case.name.to_string(),
                description: case.description.to_string(),
                habitat: case.habitat.to_string(),
                is_legendary: case.is_legendary,
            },
            "{}",
            case.name
        );

        let translated = service.get_translated_pokemon(&ctx, case.name).await.unwrap();
        assert_eq!(translated.name, plain.name);
        assert_eq!(translated.habitat, plain.habitat);
        assert_eq!(translated.is_legendary, plain.is_legendary);
        assert_eq!(
            translated.description,
            case.translation.unwrap_or(case.description),
            "{}",
            case.name
        );

        translation_mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_description_is_sanitized_before_translation() {
    let mut pokeapi = Server::new_async().await;
    let mut funtranslations = Server::new_async().await;

    let _species = common::mock_species(
        &mut pokeapi,
        "bulbasaur",
        common::species_body("bulbasaur", "grassland", false, "A strange seed\nwas planted\u{000C}on its back."),
    )
    .await;
    let translation = common::mock_translation(
        &mut funtranslations,
        "shakespeare",
        "A strange seed was planted on its back.",
        "A strange seed wast did plant on its back.",
    )
    .await;

    let service = common::direct_service(&pokeapi.url(), &funtranslations.url());
    let pokemon = service
        .get_translated_pokemon(&RequestContext::background(), "bulbasaur")
        .await
        .unwrap();

    assert_eq!(pokemon.description, "A strange seed wast did plant on its back.");
    translation.assert_async().await;
}

#[tokio::test]
async fn test_no_english_description_is_not_found() {
    let mut pokeapi = Server::new_async().await;
    let mut funtranslations = Server::new_async().await;

    let body = serde_json::json!({
        "name": "ditto",
        "is_legendary": false,
        "habitat": { "name": "urban" },
        "flavor_text_entries": [
            { "flavor_text": "Il peut modifier sa structure.", "language": { "name": "fr" } }
        ]
    })
    .to_string();
    let _species = common::mock_species(&mut pokeapi, "ditto", body).await;
    let translation = funtranslations
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = common::direct_service(&pokeapi.url(), &funtranslations.url());
    let ctx = RequestContext::background();

    assert!(service.get_pokemon(&ctx, "ditto").await.unwrap_err().is_not_found());
    assert!(service
        .get_translated_pokemon(&ctx, "ditto")
        .await
        .unwrap_err()
        .is_not_found());
    translation.assert_async().await;
}

#[tokio::test]
async fn test_species_failure_is_upstream_unavailable() {
    let mut pokeapi = Server::new_async().await;
    let funtranslations = Server::new_async().await;

    let _species = pokeapi
        .mock("GET", "/pokemon-species/pikachu")
        .with_status(502)
        .create_async()
        .await;

    let service = common::direct_service(&pokeapi.url(), &funtranslations.url());
    let err = service
        .get_translated_pokemon(&RequestContext::background(), "pikachu")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::UpstreamUnavailable(UpstreamError::FailedRequest { status: 502 })
    ));
}

#[tokio::test]
async fn test_cached_service_hits_each_upstream_once() {
    common::setup_test_logging();
    let mut pokeapi = Server::new_async().await;
    let mut funtranslations = Server::new_async().await;

    let species = pokeapi
        .mock("GET", "/pokemon-species/mewtwo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::species_body("mewtwo", "rare", true, "original description"))
        .expect(1)
        .create_async()
        .await;
    let translation = funtranslations
        .mock("POST", "/translate/yoda.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::translation_body("translated description"))
        .expect(1)
        .create_async()
        .await;

    let service = common::cached_service(
        &pokeapi.url(),
        &funtranslations.url(),
        Duration::from_secs(60),
    );
    let ctx = RequestContext::background();

    for _ in 0..3 {
        let pokemon = service.get_translated_pokemon(&ctx, "mewtwo").await.unwrap();
        assert_eq!(pokemon.description, "translated description");
    }
    let plain = service.get_pokemon(&ctx, "mewtwo").await.unwrap();
    assert_eq!(plain.description, "original description");

    species.assert_async().await;
    translation.assert_async().await;
}

#[tokio::test]
async fn test_cached_service_does_not_cache_rate_limits() {
    let mut pokeapi = Server::new_async().await;
    let mut funtranslations = Server::new_async().await;

    let _species = common::mock_species(
        &mut pokeapi,
        "mewtwo",
        common::species_body("mewtwo", "rare", true, "original description"),
    )
    .await;
    let rate_limited = funtranslations
        .mock("POST", "/translate/yoda.json")
        .with_status(429)
        .with_body(common::rate_limit_body())
        .expect(2)
        .create_async()
        .await;

    let service = common::cached_service(
        &pokeapi.url(),
        &funtranslations.url(),
        Duration::from_secs(60),
    );
    let ctx = RequestContext::background();

    for _ in 0..2 {
        let pokemon = service.get_translated_pokemon(&ctx, "mewtwo").await.unwrap();
        assert_eq!(pokemon.description, "original description");
    }
    rate_limited.assert_async().await;
}

#[tokio::test]
async fn test_cached_entries_expire() {
    let mut pokeapi = Server::new_async().await;
    let funtranslations = Server::new_async().await;

    let species = pokeapi
        .mock("GET", "/pokemon-species/pikachu")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::species_body("pikachu", "forest", false, "Electric mouse."))
        .expect(2)
        .create_async()
        .await;

    let service = common::cached_service(
        &pokeapi.url(),
        &funtranslations.url(),
        Duration::from_millis(100),
    );
    let ctx = RequestContext::background();

    service.get_pokemon(&ctx, "pikachu").await.unwrap();
    service.get_pokemon(&ctx, "pikachu").await.unwrap();
    tokio::time::sleep(Duration::from_millis(250)).await;
    service.get_pokemon(&ctx, "pikachu").await.unwrap();

    species.assert_async().await;
}
