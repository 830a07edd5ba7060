/*!
 * # MealMatch - Ingredient-based recipe search with translated display
 *
 * A Rust library for finding recipes by the ingredients on hand,
 * combining a private recipe catalog with a public recipe-finder API.
 *
 * ## Features
 *
 * - Parse free-form comma-separated ingredient queries
 * - Match recipes under a strict (all ingredients) or loose (any
 *   ingredient) policy, applied identically to both sources
 * - Keep catalog results and public-API results as separate lists,
 *   never merged into one ranking
 * - Translate recipe content for display with a persistent
 *   translation cache, degrading to the original text on any failure
 * - Serve a three-course daily menu that stays stable for the
 *   calendar day
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `search`: Ingredient parsing, match policy, and the per-source
 *   matcher
 * - `catalog`: The read-only private recipe catalog
 * - `translation`: Display translation:
 *   - `translation::cache`: Persistent (text, language) memoization
 *   - `translation::service`: Element-wise and whole-recipe translation
 * - `providers`: Clients for the external services:
 *   - `providers::spoonacular`: Public recipe-finder API client
 *   - `providers::mymemory`: Translation endpoint client
 * - `storage`: SQLite-backed persistent store
 * - `menu`: Daily three-course menu planner
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod catalog;
pub mod errors;
pub mod language_utils;
pub mod menu;
pub mod providers;
pub mod search;
pub mod storage;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use catalog::{CatalogRecipe, CatalogStore};
pub use errors::{AppError, ProviderError, SearchError};
pub use language_utils::{get_language_name, normalize_language_code};
pub use menu::{DailyMenu, MenuPlanner};
pub use search::{IngredientMatcher, MatchPolicy, SearchOutcome, SearchQuery};
pub use storage::StoreConnection;
pub use translation::{TranslationCache, TranslationService};
