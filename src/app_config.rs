use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Display language code (ISO); "en" disables translation entirely
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Recipe API config
    #[serde(default)]
    pub recipe_api: RecipeApiConfig,

    /// Translation API config
    #[serde(default)]
    pub translation_api: TranslationApiConfig,

    /// Catalog snapshot file path (JSON); empty means no catalog source
    #[serde(default = "String::new")]
    pub catalog_path: String,

    /// Store file path; empty means the platform default location
    #[serde(default = "String::new")]
    pub store_path: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Public recipe-finder API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecipeApiConfig {
    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL
    #[serde(default = "default_recipe_endpoint")]
    pub endpoint: String,

    /// Maximum candidates requested per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_recipe_endpoint(),
            page_size: default_page_size(),
        }
    }
}

/// Translation endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationApiConfig {
    /// API key for the service (optional; raises the free quota)
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,
}

impl Default for TranslationApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_translation_endpoint(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_recipe_endpoint() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_translation_endpoint() -> String {
    "https://api.mymemory.translated.net".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl Config {
    /// Load a configuration file, or write and return the default one if
    /// the file does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(config)
        } else {
            let config = Config::default();
            let config_json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize default config to JSON")?;
            std::fs::write(path, config_json)
                .with_context(|| format!("Failed to write default config to file: {:?}", path))?;
            Ok(config)
        }
    }

    /// Validate the configuration for consistency and required values.
    ///
    /// The display language is rewritten to its canonical 2-letter form
    /// so the translation langpair and the cache keys always see the
    /// same code regardless of how it was spelled in the config file.
    pub fn validate(&mut self) -> Result<()> {
        self.target_language =
            crate::language_utils::normalize_language_code(&self.target_language)?;

        if self.recipe_api.api_key.is_empty() {
            return Err(anyhow!("Recipe API key is required"));
        }

        if self.recipe_api.page_size == 0 {
            return Err(anyhow!("Recipe API page size must be at least 1"));
        }

        Ok(())
    }

    /// Whether recipe content needs translation for display
    pub fn needs_translation(&self) -> bool {
        self.target_language != crate::translation::SOURCE_LANGUAGE
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: default_target_language(),
            recipe_api: RecipeApiConfig::default(),
            translation_api: TranslationApiConfig::default(),
            catalog_path: String::new(),
            store_path: String::new(),
            log_level: LogLevel::default(),
        }
    }
}
