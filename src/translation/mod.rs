/*!
 * Translation layer: persistent caching plus the service that composes
 * cache lookups with calls to the external translation endpoint.
 *
 * - `cache`: durable memoization of (text, language) pairs
 * - `service`: translate / translate_batch / translate_recipe operations
 */

pub use self::cache::TranslationCache;
pub use self::service::{RecipeTranslation, TranslationService, SOURCE_LANGUAGE};

pub mod cache;
pub mod service;
