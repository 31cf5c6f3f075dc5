//! Pokémon service composing species lookups and translations.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Pokemon, RequestContext, Translation, TranslationStyle};
use crate::domain::ports::{SpeciesClient, Translator};

/// Pokémon service.
///
/// Holds no per-call state, so one instance serves every request. Whether
/// the clients are cached is decided by whoever builds the service.
pub struct PokemonService<S: SpeciesClient + ?Sized, T: Translator + ?Sized> {
    species: Arc<S>,
    translator: Arc<T>,
}

impl<S: SpeciesClient + ?Sized, T: Translator + ?Sized> Clone for PokemonService<S, T> {
    fn clone(&self) -> Self {
        Self {
            species: Arc::clone(&self.species),
            translator: Arc::clone(&self.translator),
        }
    }
}

impl<S: SpeciesClient + ?Sized, T: Translator + ?Sized> PokemonService<S, T> {
    /// Create a service over the given species client and translator.
    pub fn new(species: Arc<S>, translator: Arc<T>) -> Self {
        Self {
            species,
            translator,
        }
    }

    /// Look up a Pokémon and its English description.
    ///
    /// # Errors
    /// - `DomainError::UpstreamUnavailable` if the species lookup fails
    /// - `DomainError::NotFound` if the species has no English description
    #[instrument(skip(self, ctx))]
    pub async fn get_pokemon(&self, ctx: &RequestContext, name: &str) -> DomainResult<Pokemon> {
        let species = self
            .species
            .get_species(ctx, name)
            .await
            .map_err(DomainError::UpstreamUnavailable)?;

        let pokemon = Pokemon::from_species(&species).ok_or_else(|| {
            DomainError::NotFound(format!("no English description for {name}"))
        })?;

        info!(habitat = %pokemon.habitat, is_legendary = pokemon.is_legendary, "pokemon resolved");
        Ok(pokemon)
    }

    /// Look up a Pokémon with its description translated.
    ///
    /// Translation is best effort: any translator failure leaves the
    /// original description in place and the call still succeeds.
    #[instrument(skip(self, ctx))]
    pub async fn get_translated_pokemon(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> DomainResult<Pokemon> {
        let mut pokemon = self.get_pokemon(ctx, name).await?;

        let style = TranslationStyle::for_pokemon(&pokemon);
        let translation = self
            .translate_or_keep(ctx, &pokemon.description, style.as_str())
            .await;
        pokemon.apply_translation(translation);

        Ok(pokemon)
    }

    /// Translate `text`, turning any failure into [`Translation::KeepOriginal`].
    pub async fn translate_or_keep(
        &self,
        ctx: &RequestContext,
        text: &str,
        style: &str,
    ) -> Translation {
        match self.translator.translate(ctx, text, style).await {
            Ok(translated) => Translation::Translated(translated),
            Err(e) => {
                warn!(style, error = %e, "translation failed, keeping original description");
                Translation::KeepOriginal {
                    reason: e.to_string(),
                }
            }
        }
    }
}
