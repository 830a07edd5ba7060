/*!
 * Translation service.
 *
 * Composes the persistent cache with the external translation endpoint.
 * Every operation here degrades instead of failing: a recipe search must
 * never break just because the translation provider is unavailable, so
 * translation failures return the original text and are only logged.
 */

use std::sync::Arc;

use anyhow::{ensure, Result};
use futures::future::join_all;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::cache::TranslationCache;
use crate::providers::{ExtendedIngredient, RecipeDetail, TranslationApi};

/// Fixed source language. The external recipe API and the translation
/// endpoint both operate on English-ish text.
pub const SOURCE_LANGUAGE: &str = "en";

/// Matches HTML/markup tags in instruction text
static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("markup tag pattern is valid"));

/// Result of a whole-recipe translation.
///
/// The external contract always yields a usable recipe; this enum keeps
/// the total-fallback path visible instead of hiding it behind control
/// flow, so it can be asserted on directly.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeTranslation {
    /// Composition succeeded (individual fields may still have degraded
    /// to their original text per the element-wise contract)
    Translated(RecipeDetail),
    /// Composition failed as a whole; the original recipe is returned
    /// unchanged
    Fallback(RecipeDetail),
}

impl RecipeTranslation {
    /// The recipe to display, translated or not
    pub fn into_recipe(self) -> RecipeDetail {
        match self {
            RecipeTranslation::Translated(recipe) | RecipeTranslation::Fallback(recipe) => recipe,
        }
    }

    /// Whether the composition ran to completion
    pub fn is_translated(&self) -> bool {
        matches!(self, RecipeTranslation::Translated(_))
    }
}

/// Translation service over a provider client and the persistent cache
#[derive(Clone)]
pub struct TranslationService {
    /// Client for the external translation endpoint
    client: Arc<dyn TranslationApi>,

    /// Persistent translation cache
    cache: TranslationCache,
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(client: Arc<dyn TranslationApi>, cache: TranslationCache) -> Self {
        Self { client, cache }
    }

    /// Access the underlying cache
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Translate a single text into the target language.
    ///
    /// Cache hits return immediately with no network call. On a miss the
    /// endpoint is called and a success is written back. Any failure
    /// (transport, non-2xx, parse, missing field) returns `text`
    /// unchanged; this operation never raises past its own boundary.
    pub async fn translate(&self, text: &str, language: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        if let Some(cached) = self.cache.get_item(text, language).await {
            debug!("Using cached translation for '{}'", text);
            return cached;
        }

        match self
            .client
            .translate(text, SOURCE_LANGUAGE, language)
            .await
        {
            Ok(translated) => {
                self.cache.put_item(text, language, &translated).await;
                translated
            }
            Err(e) => {
                warn!("Translation of '{}' failed, using original text: {}", text, e);
                text.to_string()
            }
        }
    }

    /// Translate a sequence of texts.
    ///
    /// Items fan out concurrently; the output has the same length and
    /// order as the input, and each element succeeds or degrades
    /// independently of the others.
    pub async fn translate_batch(&self, texts: &[String], language: &str) -> Vec<String> {
        let futures = texts.iter().map(|text| self.translate(text, language));
        join_all(futures).await
    }

    /// Translate a whole recipe for display: title, each ingredient line,
    /// and instructions (line by line, markup stripped).
    ///
    /// Checks the recipe-namespace cache first and writes the result back
    /// on success. If the composition itself fails, the original recipe
    /// is returned unchanged as `Fallback` — never a partial translation.
    pub async fn translate_recipe(&self, recipe: &RecipeDetail, language: &str) -> RecipeTranslation {
        if let Some(cached) = self.cache.get_recipe(recipe.id, language).await {
            debug!("Using cached translation for recipe {}", recipe.id);
            return RecipeTranslation::Translated(cached);
        }

        match self.translate_recipe_fields(recipe, language).await {
            Ok(translated) => {
                self.cache.put_recipe(recipe.id, language, &translated).await;
                RecipeTranslation::Translated(translated)
            }
            Err(e) => {
                warn!(
                    "Whole-recipe translation of {} failed, returning original: {}",
                    recipe.id, e
                );
                RecipeTranslation::Fallback(recipe.clone())
            }
        }
    }

    /// Translate the textual fields of a recipe, leaving the rest intact
    async fn translate_recipe_fields(
        &self,
        recipe: &RecipeDetail,
        language: &str,
    ) -> Result<RecipeDetail> {
        let title = self.translate(&recipe.title, language).await;

        let ingredient_lines: Vec<String> = recipe
            .extended_ingredients
            .iter()
            .map(|ing| ing.original.clone())
            .collect();
        let translated_lines = self.translate_batch(&ingredient_lines, language).await;
        ensure!(
            translated_lines.len() == recipe.extended_ingredients.len(),
            "Ingredient translation count mismatch: {} != {}",
            translated_lines.len(),
            recipe.extended_ingredients.len()
        );

        let instructions = match &recipe.instructions {
            Some(raw) => {
                let lines = instruction_lines(raw);
                let translated = self.translate_batch(&lines, language).await;
                Some(translated.join("\n"))
            }
            None => None,
        };

        Ok(RecipeDetail {
            title,
            extended_ingredients: translated_lines
                .into_iter()
                .map(|original| ExtendedIngredient { original })
                .collect(),
            instructions,
            ..recipe.clone()
        })
    }
}

/// Split instruction markup into translatable lines: strip tags, split on
/// newlines, drop lines that are empty after trimming
fn instruction_lines(raw: &str) -> Vec<String> {
    let stripped = MARKUP_TAG.replace_all(raw, "");
    stripped
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
