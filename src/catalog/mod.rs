/*!
 * Read-only interface to the externally-managed recipe catalog.
 *
 * The catalog (user accounts, categories, recipes, ingredient index)
 * lives in an external document store owned by the mobile application.
 * This core only ever reads two collections: the ingredient-name index
 * and the recipe list. The `CatalogStore` trait is the injected seam;
 * lifecycle of the concrete client belongs to the composition root.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod json;

pub use json::{JsonCatalog, MemoryCatalog};

/// One entry of the catalog's ingredient-name index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogIngredient {
    /// Document identifier
    pub id: String,
    /// Ingredient name exactly as stored (casing is inconsistent)
    pub name: String,
}

/// One ingredient line of a catalog recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    /// Ingredient name
    pub name: String,
    /// Amount, free text
    #[serde(default)]
    pub quantity: Option<String>,
    /// Unit, free text
    #[serde(default)]
    pub unit: Option<String>,
}

/// A recipe document from the catalog.
///
/// Unlike public-API candidates, a catalog record already carries full
/// detail; opening it needs no second fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecipe {
    /// Document identifier
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Image URL in object storage
    #[serde(default)]
    pub image: Option<String>,
    /// Preparation time, free text as entered by the author
    #[serde(default)]
    pub preparation_time: Option<String>,
    /// Star rating, 0-5
    #[serde(default)]
    pub rating: Option<u8>,
    /// Number of servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Category document id
    #[serde(default)]
    pub category: Option<String>,
    /// Owning user id
    #[serde(default)]
    pub user: Option<String>,
}

/// Read-only queries against the external catalog
#[async_trait]
pub trait CatalogStore: Send + Sync + Debug {
    /// List the ingredient-name index
    async fn list_ingredients(&self) -> anyhow::Result<Vec<CatalogIngredient>>;

    /// List all recipe documents
    async fn list_recipes(&self) -> anyhow::Result<Vec<CatalogRecipe>>;
}
