/*!
 * Error types for the mealmatch crate.
 *
 * This module contains custom error types for different parts of the crate,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to an external API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when sending an API request fails (network unreachable, timeout)
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Non-success status returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error reported inside an otherwise-successful response body
    #[error("Provider rejected the request: {0}")]
    Rejected(String),
}

/// Failures surfaced by a recipe search.
///
/// These are the only user-facing failure classes: the candidate search
/// itself failing, the follow-up detail fetch failing, or the catalog
/// collaborator being unreadable. Zero-result outcomes are not errors
/// and are represented separately as `EmptyReason`.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The candidate search against an upstream source failed
    #[error("Recipe search failed: {0}")]
    FetchFailed(#[source] ProviderError),

    /// The full-detail fetch for a selected candidate failed
    #[error("Recipe detail fetch failed: {0}")]
    FetchDetailFailed(#[source] ProviderError),

    /// The catalog collaborator could not be read
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a recipe search
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Error from the persistent store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Storage(error.to_string())
    }
}
