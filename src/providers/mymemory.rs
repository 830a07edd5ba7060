use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::TranslationApi;
use crate::errors::ProviderError;

/// Default public MyMemory endpoint
const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net";

/// MyMemory client for the public translation API
#[derive(Debug)]
pub struct MyMemory {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

/// Top-level MyMemory response
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponse {
    /// Status code embedded in the body; 200 is the only success value
    #[serde(rename = "responseStatus")]
    pub response_status: i64,

    /// Payload carrying the translated text
    #[serde(rename = "responseData")]
    pub response_data: Option<MyMemoryData>,

    /// Human-readable error detail on failure
    #[serde(rename = "responseDetails")]
    pub response_details: Option<String>,
}

/// Translation payload in a MyMemory response
#[derive(Debug, Deserialize)]
pub struct MyMemoryData {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
}

impl MyMemory {
    /// Create a new MyMemory client
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

    /// Build the GET url for a translation request
    fn request_url(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<Url, ProviderError> {
        let base = format!("{}/get", self.endpoint.trim_end_matches('/'));
        let mut url = Url::parse(&base)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("q", text)
            .append_pair(
                "langpair",
                &format!("{}|{}", source_language, target_language),
            )
            .append_pair("key", &self.api_key);

        Ok(url)
    }
}

#[async_trait]
impl TranslationApi for MyMemory {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let url = self.request_url(text, source_language, target_language)?;

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
            error!("MyMemory API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .json::<MyMemoryResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if body.response_status != 200 {
            let details = body
                .response_details
                .unwrap_or_else(|| "no details".to_string());
            error!(
                "MyMemory rejected translation (status {}): {}",
                body.response_status, details
            );
            return Err(ProviderError::Rejected(details));
        }

        match body.response_data.and_then(|d| d.translated_text) {
            Some(translated) if !translated.is_empty() => Ok(translated),
            _ => Err(ProviderError::ParseError(
                "Response is missing translatedText".to_string(),
            )),
        }
    }
}
