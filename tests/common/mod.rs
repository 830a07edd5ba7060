/*!
 * Common test utilities shared across the test suite
 */


use mealmatch::catalog::{CatalogIngredient, CatalogRecipe, MemoryCatalog, RecipeIngredient};
use mealmatch::providers::{ExtendedIngredient, RecipeDetail, RecipeSummary, UsedIngredient};

/// Initialize logging for a test; safe to call from every test
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a catalog ingredient index entry
pub fn ingredient(id: &str, name: &str) -> CatalogIngredient {
    CatalogIngredient {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Build a catalog recipe with the given ingredient names
pub fn catalog_recipe(id: &str, title: &str, ingredient_names: &[&str]) -> CatalogRecipe {
    CatalogRecipe {
        id: id.to_string(),
        title: title.to_string(),
        ingredients: ingredient_names
            .iter()
            .map(|name| RecipeIngredient {
                name: name.to_string(),
                quantity: None,
                unit: None,
            })
            .collect(),
        image: None,
        preparation_time: None,
        rating: None,
        servings: None,
        steps: Vec::new(),
        notes: None,
        category: None,
        user: None,
    }
}

/// Build a catalog populated with a fixed ingredient index and recipes.
/// The index mirrors the mixed casing seen in real data.
pub fn sample_catalog() -> MemoryCatalog {
    MemoryCatalog::new(
        vec![
            ingredient("i1", "Chicken"),
            ingredient("i2", "rice"),
            ingredient("i3", "Garlic"),
            ingredient("i4", "egg"),
        ],
        vec![
            catalog_recipe("r1", "Chicken risotto", &["Chicken", "rice", "Garlic"]),
            catalog_recipe("r2", "Fried rice", &["rice", "egg"]),
            catalog_recipe("r3", "Garlic bread", &["Garlic"]),
        ],
    )
}

/// Build a public-API recipe summary with the given used-ingredient names
pub fn recipe_summary(id: u64, title: &str, used: &[&str]) -> RecipeSummary {
    RecipeSummary {
        id,
        title: title.to_string(),
        image: None,
        used_ingredients: used
            .iter()
            .map(|name| UsedIngredient {
                name: name.to_string(),
            })
            .collect(),
        missed_ingredient_count: 0,
        likes: 0,
    }
}

/// Build a public-API recipe detail
pub fn recipe_detail(id: u64, title: &str, ingredient_lines: &[&str]) -> RecipeDetail {
    RecipeDetail {
        id,
        title: title.to_string(),
        image: None,
        servings: Some(4),
        ready_in_minutes: Some(30),
        extended_ingredients: ingredient_lines
            .iter()
            .map(|line| ExtendedIngredient {
                original: line.to_string(),
            })
            .collect(),
        instructions: Some("Cook everything.".to_string()),
    }
}
