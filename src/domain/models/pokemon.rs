//! Pokémon domain models.
//!
//! `PokemonSpecies` mirrors the subset of the PokeAPI `pokemon-species`
//! payload the service reads; `Pokemon` is the normalized record handed
//! back to callers.

use serde::{Deserialize, Serialize};

use super::translation::Translation;

/// Language code of the description served to callers.
pub const DESCRIPTION_LANGUAGE: &str = "en";

/// Habitat that selects the Yoda translation regardless of legendary status.
pub const CAVE_HABITAT: &str = "cave";

/// Normalized, provider-agnostic view of a Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    /// Species name as echoed by the upstream
    pub name: String,
    /// Plain-text description (newlines and form feeds replaced by spaces)
    pub description: String,
    /// Habitat name, empty when the species has none
    pub habitat: String,
    /// Whether the species is legendary
    pub is_legendary: bool,
}

impl Pokemon {
    /// Build a record from a raw species payload.
    ///
    /// Returns `None` when the payload carries no description in
    /// [`DESCRIPTION_LANGUAGE`].
    pub fn from_species(species: &PokemonSpecies) -> Option<Self> {
        let description = species.description_in(DESCRIPTION_LANGUAGE)?;

        Some(Self {
            name: species.name.clone(),
            description: sanitize_description(description),
            habitat: species.habitat_name().to_string(),
            is_legendary: species.is_legendary,
        })
    }

    /// Overwrite the description when a translation was produced.
    ///
    /// Returns `true` if the description changed hands.
    pub fn apply_translation(&mut self, translation: Translation) -> bool {
        match translation {
            Translation::Translated(text) => {
                self.description = text;
                true
            }
            Translation::KeepOriginal { .. } => false,
        }
    }
}

/// Raw species payload returned by the species upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    /// Species name
    pub name: String,
    /// Legendary flag
    #[serde(default)]
    pub is_legendary: bool,
    /// Habitat reference, absent for some species
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    /// Localized descriptions
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

impl PokemonSpecies {
    /// Habitat name, or an empty string when the upstream reports none.
    pub fn habitat_name(&self) -> &str {
        self.habitat.as_ref().map_or("", |habitat| habitat.name.as_str())
    }

    /// First flavor text written in `language`, in upstream order.
    pub fn description_in(&self, language: &str) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.as_str())
    }
}

/// A `{ "name": ... }` reference as used throughout PokeAPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
}

/// One localized flavor text of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    /// Raw text, may contain control characters
    pub flavor_text: String,
    /// Language of the text
    pub language: NamedResource,
}

/// Replace newlines and form feeds with single spaces.
///
/// No other normalization is applied: case, punctuation and runs of
/// spaces are preserved.
pub fn sanitize_description(text: &str) -> String {
    text.replace(['\n', '\u{000C}'], " ")
}
