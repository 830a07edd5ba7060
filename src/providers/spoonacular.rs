use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::RecipeApi;
use crate::errors::ProviderError;

/// Default public Spoonacular endpoint
const DEFAULT_ENDPOINT: &str = "https://api.spoonacular.com";

/// Spoonacular client for the public recipe-finder API
#[derive(Debug)]
pub struct Spoonacular {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

/// Candidate recipe summary from the findByIngredients endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Recipe identifier
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Query ingredients the API matched in this recipe
    #[serde(default)]
    pub used_ingredients: Vec<UsedIngredient>,
    /// How many query ingredients the recipe is missing
    #[serde(default)]
    pub missed_ingredient_count: u32,
    /// Like count reported by the API
    #[serde(default)]
    pub likes: u32,
}

/// Matched ingredient inside a candidate summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsedIngredient {
    /// Ingredient name as the API stores it
    pub name: String,
}

/// Full recipe detail from the information endpoint.
///
/// The random endpoint returns the same shape, wrapped in a
/// `{ "recipes": [...] }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Recipe identifier
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Number of servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Total preparation time in minutes
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    /// Ingredient lines with quantities, as display text
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    /// Preparation instructions; may contain HTML markup
    #[serde(default)]
    pub instructions: Option<String>,
}

/// One ingredient line of a full recipe detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtendedIngredient {
    /// Display text of the ingredient line ("2 cups flour")
    pub original: String,
}

/// Envelope of the random-recipe endpoint
#[derive(Debug, Deserialize)]
struct RandomRecipesResponse {
    recipes: Vec<RecipeDetail>,
}

impl Spoonacular {
    /// Create a new Spoonacular client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: if endpoint.is_empty() {
                DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
        }
    }

    /// Build a GET url for the given path and query pairs, with the API key appended
    fn request_url(&self, path: &str, pairs: &[(&str, &str)]) -> Result<Url, ProviderError> {
        let base = format!("{}{}", self.endpoint.trim_end_matches('/'), path);
        let mut url = Url::parse(&base)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint: {}", e)))?;

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, value);
            }
            query.append_pair("apiKey", &self.api_key);
        }

        Ok(url)
    }

    /// Issue a GET request and deserialize the JSON body
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Spoonacular API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for Spoonacular {
    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError> {
        let joined = ingredients.join(",");
        let number = number.to_string();
        let url = self.request_url(
            "/recipes/findByIngredients",
            &[("ingredients", joined.as_str()), ("number", number.as_str())],
        )?;

        self.get_json(url).await
    }

    async fn recipe_information(&self, recipe_id: u64) -> Result<RecipeDetail, ProviderError> {
        let url = self.request_url(&format!("/recipes/{}/information", recipe_id), &[])?;
        self.get_json(url).await
    }

    async fn random_recipe(&self, tag: &str) -> Result<RecipeDetail, ProviderError> {
        let url = self.request_url("/recipes/random", &[("tags", tag)])?;

        let envelope: RandomRecipesResponse = self.get_json(url).await?;
        envelope.recipes.into_iter().next().ok_or_else(|| {
            ProviderError::ParseError("Random endpoint returned no recipes".to_string())
        })
    }
}
