/*!
 * Query parsing and match policy.
 */

use serde::{Deserialize, Serialize};

/// Match policy shared by both recipe sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Every query ingredient must be present in a candidate
    Strict,
    /// At least one query ingredient must be present in a candidate
    Loose,
}

impl MatchPolicy {
    /// Map the UI's "recipe contains all ingredients" toggle
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MatchPolicy::Strict
        } else {
            MatchPolicy::Loose
        }
    }

    /// Whether this policy requires all ingredients
    pub fn is_strict(self) -> bool {
        self == MatchPolicy::Strict
    }
}

/// A parsed search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Ingredient tokens in input order; duplicates are not removed
    pub ingredients: Vec<String>,
    /// Strict or loose matching
    pub policy: MatchPolicy,
}

impl SearchQuery {
    /// Parse a raw ingredient string into a query
    pub fn new(raw_input: &str, strict: bool) -> Self {
        Self {
            ingredients: parse_query(raw_input),
            policy: MatchPolicy::from_strict(strict),
        }
    }
}

/// Parse a raw comma-separated ingredient string into tokens.
///
/// Splits on commas, trims whitespace, drops tokens that are empty after
/// trimming. Order is preserved and casing is untouched; each source's
/// lookup is responsible for its own case handling.
pub fn parse_query(raw_input: &str) -> Vec<String> {
    raw_input
        .split(',')
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}
