/*!
 * Catalog implementations backed by local data.
 *
 * `JsonCatalog` reads an exported snapshot of the document store from a
 * JSON file, which is what the CLI runs against. `MemoryCatalog` holds
 * the collections directly and exists for tests and embedding.
 */

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::{CatalogIngredient, CatalogRecipe, CatalogStore};

/// On-disk snapshot shape: the two collections this core reads
#[derive(Debug, Deserialize)]
struct CatalogSnapshot {
    #[serde(default)]
    ingredients: Vec<CatalogIngredient>,
    #[serde(default)]
    recipes: Vec<CatalogRecipe>,
}

/// Catalog backed by a JSON snapshot file.
///
/// The file is re-read on every query so edits show up without a restart;
/// the collections are small enough that this is not a concern.
#[derive(Debug)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Create a catalog reading from the given snapshot file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<CatalogSnapshot> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open catalog snapshot: {:?}", self.path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse catalog snapshot: {:?}", self.path))
    }
}

#[async_trait]
impl CatalogStore for JsonCatalog {
    async fn list_ingredients(&self) -> Result<Vec<CatalogIngredient>> {
        Ok(self.load()?.ingredients)
    }

    async fn list_recipes(&self) -> Result<Vec<CatalogRecipe>> {
        Ok(self.load()?.recipes)
    }
}

/// In-memory catalog for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    ingredients: Vec<CatalogIngredient>,
    recipes: Vec<CatalogRecipe>,
}

impl MemoryCatalog {
    /// Create a catalog holding the given collections
    pub fn new(ingredients: Vec<CatalogIngredient>, recipes: Vec<CatalogRecipe>) -> Self {
        Self {
            ingredients,
            recipes,
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list_ingredients(&self) -> Result<Vec<CatalogIngredient>> {
        Ok(self.ingredients.clone())
    }

    async fn list_recipes(&self) -> Result<Vec<CatalogRecipe>> {
        Ok(self.recipes.clone())
    }
}
