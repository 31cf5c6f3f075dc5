//! Translation styles and the outcome of a best-effort translation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pokemon::{Pokemon, CAVE_HABITAT};
use crate::domain::errors::UpstreamError;

/// Styles the translation upstream knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStyle {
    /// Used for legendary and cave-dwelling Pokémon.
    Yoda,
    /// Used for everyone else.
    Shakespeare,
}

impl TranslationStyle {
    /// Name of the style as the translation upstream spells it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yoda => "yoda",
            Self::Shakespeare => "shakespeare",
        }
    }

    /// Pick the style for a Pokémon.
    ///
    /// Legendary Pokémon and cave dwellers get Yoda, everyone else gets
    /// Shakespeare.
    pub fn for_pokemon(pokemon: &Pokemon) -> Self {
        if pokemon.is_legendary || pokemon.habitat == CAVE_HABITAT {
            Self::Yoda
        } else {
            Self::Shakespeare
        }
    }
}

impl fmt::Display for TranslationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranslationStyle {
    type Err = UpstreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yoda" => Ok(Self::Yoda),
            "shakespeare" => Ok(Self::Shakespeare),
            other => Err(UpstreamError::UnsupportedStyle(other.to_string())),
        }
    }
}

/// Result of asking for a translated description.
///
/// Translation never fails the surrounding request: a failed attempt is
/// represented as [`Translation::KeepOriginal`] carrying the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The translated text.
    Translated(String),
    /// Translation failed; the original description stands.
    KeepOriginal {
        /// Why the translation was not used
        reason: String,
    },
}

impl Translation {
    /// True when a translated text is available.
    pub const fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }
}
