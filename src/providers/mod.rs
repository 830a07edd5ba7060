/*!
 * Client implementations for the external services mealmatch consumes.
 *
 * This module contains the HTTP clients for the two third-party APIs:
 * - MyMemory: public translation endpoint
 * - Spoonacular: public recipe-finder endpoint
 *
 * Both sit behind async traits so the search and translation layers can
 * be exercised against scripted fakes in tests.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

pub mod mymemory;
pub mod spoonacular;

pub use spoonacular::{ExtendedIngredient, RecipeDetail, RecipeSummary, UsedIngredient};

/// Remote translation endpoint.
///
/// Implementations translate a single text between two language codes.
/// Failure semantics (degrading to the original text) belong to the
/// caller, not the client: the client reports every failure faithfully.
#[async_trait]
pub trait TranslationApi: Send + Sync + Debug {
    /// Translate `text` from `source_language` to `target_language`
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;
}

/// Remote recipe-finder endpoint.
#[async_trait]
pub trait RecipeApi: Send + Sync + Debug {
    /// Search candidate recipes by a list of ingredient names.
    /// Returns at most `number` summaries in the order the API ranked them.
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError>;

    /// Fetch the full detail for a single recipe.
    /// The search endpoint only returns summaries, so opening a candidate
    /// requires this second round-trip.
    async fn recipe_information(&self, recipe_id: u64) -> Result<RecipeDetail, ProviderError>;

    /// Fetch one random recipe matching the given tag
    async fn random_recipe(&self, tag: &str) -> Result<RecipeDetail, ProviderError>;
}
