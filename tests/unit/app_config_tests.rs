/*!
 * Tests for configuration loading and validation
 */

use mealmatch::app_config::{Config, LogLevel};
use tempfile::tempdir;

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaultConfig() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).expect("Should create default config");

    assert!(path.exists());
    assert_eq!(config.target_language, "en");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_loadOrCreate_withExistingFile_shouldParseIt() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("conf.json");

    std::fs::write(
        &path,
        r#"{
            "target_language": "hr",
            "recipe_api": { "api_key": "abc", "page_size": 5 },
            "log_level": "debug"
        }"#,
    )
    .expect("Failed to write config");

    let config = Config::load_or_create(&path).expect("Should load config");

    assert_eq!(config.target_language, "hr");
    assert_eq!(config.recipe_api.api_key, "abc");
    assert_eq!(config.recipe_api.page_size, 5);
    assert_eq!(config.log_level, LogLevel::Debug);
    // Omitted sections fall back to defaults
    assert_eq!(
        config.translation_api.endpoint,
        "https://api.mymemory.translated.net"
    );
}

#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("conf.json");

    std::fs::write(&path, "{ not json").expect("Failed to write config");

    assert!(Config::load_or_create(&path).is_err());
}

#[test]
fn test_loadOrCreate_roundTrip_shouldPreserveDefaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("conf.json");

    let created = Config::load_or_create(&path).expect("Should create default config");
    let reloaded = Config::load_or_create(&path).expect("Should reload config");

    assert_eq!(created.target_language, reloaded.target_language);
    assert_eq!(created.recipe_api.endpoint, reloaded.recipe_api.endpoint);
    assert_eq!(created.recipe_api.page_size, reloaded.recipe_api.page_size);
}
