/*!
 * Persistent translation cache.
 *
 * Memoizes (text, language) pairs in the local store so repeat lookups
 * never hit the paid translation endpoint. Two namespaces exist and are
 * never interchangeable: `item` holds single translated strings
 * (ingredient tokens, titles), `recipe` holds whole translated-recipe
 * payloads keyed by recipe id. Entries never expire.
 *
 * No operation here fails past its boundary: a storage read error is a
 * cache miss, a storage write error is a no-op. Both are logged.
 */

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;
use rusqlite::params;

use crate::providers::RecipeDetail;
use crate::storage::StoreConnection;

/// Cache namespace; keys from one are invisible to the other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Single translated strings (ingredient tokens, titles)
    Item,
    /// JSON payloads of whole translated recipes
    Recipe,
}

impl Namespace {
    fn as_str(self) -> &'static str {
        match self {
            Namespace::Item => "item",
            Namespace::Recipe => "recipe",
        }
    }
}

/// Persistent translation cache over the local store
pub struct TranslationCache {
    /// Backing store
    store: StoreConnection,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,
}

/// Build a cache key from text and language.
///
/// The literal `"{text}-{language}"` form matches the keys the mobile
/// app has been writing since its first release; changing the separator
/// or ordering would orphan every existing entry.
fn cache_key(text: &str, language: &str) -> String {
    format!("{}-{}", text, language)
}

impl TranslationCache {
    /// Create a cache over the given store
    pub fn new(store: StoreConnection) -> Self {
        Self {
            store,
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
        }
    }

    /// Look up a cached item translation
    pub async fn get_item(&self, text: &str, language: &str) -> Option<String> {
        self.get_raw(Namespace::Item, cache_key(text, language))
            .await
    }

    /// Store an item translation; overwrites any previous value
    pub async fn put_item(&self, text: &str, language: &str, translated: &str) {
        self.put_raw(
            Namespace::Item,
            cache_key(text, language),
            translated.to_string(),
        )
        .await;
    }

    /// Look up a cached whole-recipe translation.
    /// A stored payload that no longer deserializes counts as a miss.
    pub async fn get_recipe(&self, recipe_id: u64, language: &str) -> Option<RecipeDetail> {
        let key = cache_key(&recipe_id.to_string(), language);
        let payload = self.get_raw(Namespace::Recipe, key.clone()).await?;

        match serde_json::from_str(&payload) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!("Discarding unreadable cached recipe '{}': {}", key, e);
                None
            }
        }
    }

    /// Store a whole-recipe translation under its recipe id
    pub async fn put_recipe(&self, recipe_id: u64, language: &str, recipe: &RecipeDetail) {
        let key = cache_key(&recipe_id.to_string(), language);
        let payload = match serde_json::to_string(recipe) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize recipe for cache '{}': {}", key, e);
                return;
            }
        };

        self.put_raw(Namespace::Recipe, key, payload).await;
    }

    /// Read one entry; storage errors degrade to a miss
    async fn get_raw(&self, namespace: Namespace, key: String) -> Option<String> {
        let lookup_key = key.clone();
        let result = self
            .store
            .execute_async(move |conn| {
                use rusqlite::OptionalExtension;
                let value: Option<String> = conn
                    .query_row(
                        "SELECT translated_text FROM translations WHERE namespace = ?1 AND cache_key = ?2",
                        params![namespace.as_str(), lookup_key],
                        |row| row.get(0),
                    )
                    .optional()?;
                Ok(value)
            })
            .await;

        match result {
            Ok(Some(value)) => {
                *self.hits.write() += 1;
                debug!("Cache hit [{}] for '{}'", namespace.as_str(), truncate_text(&key, 40));
                Some(value)
            }
            Ok(None) => {
                *self.misses.write() += 1;
                debug!("Cache miss [{}] for '{}'", namespace.as_str(), truncate_text(&key, 40));
                None
            }
            Err(e) => {
                *self.misses.write() += 1;
                warn!("Cache read failed for '{}', treating as miss: {}", key, e);
                None
            }
        }
    }

    /// Write one entry; storage errors degrade to a no-op
    async fn put_raw(&self, namespace: Namespace, key: String, value: String) {
        let written_key = key.clone();
        let result = self
            .store
            .execute_async(move |conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO translations (namespace, cache_key, translated_text, created_at)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        namespace.as_str(),
                        written_key,
                        value,
                        chrono::Utc::now().to_rfc3339(),
                    ],
                )?;
                Ok(())
            })
            .await;

        match result {
            Ok(()) => debug!("Cached [{}] '{}'", namespace.as_str(), truncate_text(&key, 40)),
            Err(e) => warn!("Cache write failed for '{}': {}", key, e),
        }
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
        }
    }
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_length).collect::<String>())
    }
}
