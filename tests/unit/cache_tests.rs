/*!
 * Tests for the persistent translation cache
 */

use mealmatch::storage::StoreConnection;
use mealmatch::translation::TranslationCache;

use crate::common::recipe_detail;

fn test_cache() -> TranslationCache {
    let store = StoreConnection::new_in_memory().expect("Failed to create in-memory store");
    TranslationCache::new(store)
}

#[tokio::test]
async fn test_getItem_withEmptyCache_shouldMiss() {
    let cache = test_cache();

    assert!(cache.get_item("chicken", "hr").await.is_none());
}

#[tokio::test]
async fn test_putItem_thenGetItem_shouldReturnStoredTranslation() {
    let cache = test_cache();

    cache.put_item("chicken", "hr", "piletina").await;

    assert_eq!(
        cache.get_item("chicken", "hr").await,
        Some("piletina".to_string())
    );
}

#[tokio::test]
async fn test_putItem_withSameTextDifferentLanguage_shouldKeepSeparateEntries() {
    let cache = test_cache();

    cache.put_item("chicken", "hr", "piletina").await;
    cache.put_item("chicken", "fr", "poulet").await;

    assert_eq!(
        cache.get_item("chicken", "hr").await,
        Some("piletina".to_string())
    );
    assert_eq!(
        cache.get_item("chicken", "fr").await,
        Some("poulet".to_string())
    );
}

#[tokio::test]
async fn test_putItem_twice_shouldOverwrite() {
    let cache = test_cache();

    cache.put_item("chicken", "hr", "pile").await;
    cache.put_item("chicken", "hr", "piletina").await;

    assert_eq!(
        cache.get_item("chicken", "hr").await,
        Some("piletina".to_string())
    );
}

#[tokio::test]
async fn test_getRecipe_afterPutItemWithCollidingKey_shouldNotCrossNamespaces() {
    let cache = test_cache();

    // Item entry whose key collides exactly with recipe 7's key
    cache.put_item("7", "hr", "sedam").await;

    assert!(cache.get_recipe(7, "hr").await.is_none());
}

#[tokio::test]
async fn test_putRecipe_thenGetRecipe_shouldReturnStoredRecipe() {
    let cache = test_cache();
    let recipe = recipe_detail(42, "Pileći rižoto", &["piletina", "riža"]);

    cache.put_recipe(42, "hr", &recipe).await;

    assert_eq!(cache.get_recipe(42, "hr").await, Some(recipe));
}

#[tokio::test]
async fn test_getRecipe_withDifferentLanguage_shouldMiss() {
    let cache = test_cache();
    let recipe = recipe_detail(42, "Pileći rižoto", &["piletina"]);

    cache.put_recipe(42, "hr", &recipe).await;

    assert!(cache.get_recipe(42, "fr").await.is_none());
}

#[tokio::test]
async fn test_stats_shouldTrackHitsAndMisses() {
    let cache = test_cache();

    cache.get_item("chicken", "hr").await; // miss
    cache.put_item("chicken", "hr", "piletina").await;
    cache.get_item("chicken", "hr").await; // hit

    let (hits, misses, hit_rate) = cache.stats();
    assert_eq!(hits, 1);
    assert_eq!(misses, 1);
    assert!((hit_rate - 0.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_clone_shouldShareUnderlyingStore() {
    let cache = test_cache();
    let clone = cache.clone();

    cache.put_item("rice", "hr", "riža").await;

    assert_eq!(clone.get_item("rice", "hr").await, Some("riža".to_string()));
}
