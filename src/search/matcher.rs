/*!
 * Ingredient matcher: per-source candidate search.
 *
 * The catalog path confirms query tokens against the ingredient-name
 * index first (dual-case lookup), then scans all recipes under the match
 * policy. The public-API path translates tokens when needed, queries the
 * findByIngredients endpoint, and re-filters the candidates locally —
 * the API's own ranking is not trusted to enforce strict/loose
 * semantics.
 *
 * Zero-result outcomes are terminal states, not errors, and distinguish
 * "no ingredients recognized" from "no recipes matched" so callers can
 * give different guidance.
 */

use std::sync::Arc;

use log::{debug, warn};

use super::query::MatchPolicy;
use super::session::SearchSequence;
use crate::catalog::{CatalogRecipe, CatalogStore};
use crate::errors::SearchError;
use crate::providers::{RecipeApi, RecipeDetail, RecipeSummary};
use crate::translation::{TranslationService, SOURCE_LANGUAGE};

/// Default page size requested from the public API
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Why a search ended with zero candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No query ingredient was recognized by the source
    NoIngredientsRecognized,
    /// Ingredients were recognized but no recipe satisfied the policy
    NoRecipesMatched,
}

/// Terminal state of one search against one source
#[derive(Debug)]
pub enum SearchOutcome<T> {
    /// One or more candidates matched
    Done(Vec<T>),
    /// Zero candidates; not an error
    Empty(EmptyReason),
    /// Upstream transport or parse failure
    Failed(SearchError),
}

impl<T> SearchOutcome<T> {
    /// The candidates, if the search completed with matches
    pub fn candidates(&self) -> Option<&[T]> {
        match self {
            SearchOutcome::Done(candidates) => Some(candidates),
            _ => None,
        }
    }
}

/// A candidate selected from a result list, tagged with its source
#[derive(Debug, Clone)]
pub enum MatchCandidate {
    /// Catalog candidate; already carries full detail
    Catalog(CatalogRecipe),
    /// Public-API candidate; detail requires a second fetch
    Public(RecipeSummary),
}

/// Full detail for an opened candidate
#[derive(Debug, Clone)]
pub enum CandidateDetail {
    /// Catalog recipe document
    Catalog(CatalogRecipe),
    /// Public-API recipe detail
    Public(RecipeDetail),
}

/// Ingredient matcher over the two recipe sources.
///
/// Collaborators are injected; the composition root owns their
/// lifecycles. Callers running overlapping searches should take a ticket
/// from [`sequence`](Self::sequence) before awaiting and drop completions
/// whose ticket is no longer current.
pub struct IngredientMatcher {
    /// Read-only catalog collaborator
    catalog: Arc<dyn CatalogStore>,
    /// Public recipe-finder client
    recipe_api: Arc<dyn RecipeApi>,
    /// Translation service for non-English queries
    translator: TranslationService,
    /// Page size for public-API searches
    page_size: u32,
    /// Stale-search guard
    sequence: SearchSequence,
}

impl IngredientMatcher {
    /// Create a matcher with the default page size
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        recipe_api: Arc<dyn RecipeApi>,
        translator: TranslationService,
    ) -> Self {
        Self::with_page_size(catalog, recipe_api, translator, DEFAULT_PAGE_SIZE)
    }

    /// Create a matcher requesting up to `page_size` public-API candidates
    pub fn with_page_size(
        catalog: Arc<dyn CatalogStore>,
        recipe_api: Arc<dyn RecipeApi>,
        translator: TranslationService,
        page_size: u32,
    ) -> Self {
        Self {
            catalog,
            recipe_api,
            translator,
            page_size,
            sequence: SearchSequence::new(),
        }
    }

    /// Stale-search guard shared by all invocations on this matcher
    pub fn sequence(&self) -> &SearchSequence {
        &self.sequence
    }

    /// Search the catalog source.
    ///
    /// Each token is looked up in the ingredient-name index under BOTH
    /// its all-lowercase form and its first-letter-capitalized form; the
    /// index stores names in either casing and neither form can be
    /// assumed. The distinct matched names form the confirmed set, which
    /// the policy is then applied against over all catalog recipes.
    pub async fn match_against_catalog(
        &self,
        tokens: &[String],
        policy: MatchPolicy,
    ) -> SearchOutcome<CatalogRecipe> {
        if tokens.is_empty() {
            return SearchOutcome::Empty(EmptyReason::NoIngredientsRecognized);
        }

        let index = match self.catalog.list_ingredients().await {
            Ok(index) => index,
            Err(e) => {
                warn!("Catalog ingredient listing failed: {}", e);
                return SearchOutcome::Failed(SearchError::CatalogUnavailable(e.to_string()));
            }
        };

        let mut confirmed: Vec<String> = Vec::new();
        for token in tokens {
            for form in lookup_forms(token) {
                for entry in index.iter().filter(|entry| entry.name == form) {
                    if !confirmed.contains(&entry.name) {
                        confirmed.push(entry.name.clone());
                    }
                }
            }
        }

        if confirmed.is_empty() {
            debug!("No catalog ingredients recognized for {:?}", tokens);
            return SearchOutcome::Empty(EmptyReason::NoIngredientsRecognized);
        }

        let recipes = match self.catalog.list_recipes().await {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!("Catalog recipe listing failed: {}", e);
                return SearchOutcome::Failed(SearchError::CatalogUnavailable(e.to_string()));
            }
        };

        let mut matches: Vec<CatalogRecipe> = recipes
            .into_iter()
            .filter(|recipe| {
                let contains = |name: &str| {
                    recipe
                        .ingredients
                        .iter()
                        .any(|ingredient| ingredient.name.trim() == name)
                };
                match policy {
                    MatchPolicy::Strict => confirmed.iter().all(|name| contains(name)),
                    MatchPolicy::Loose => confirmed.iter().any(|name| contains(name)),
                }
            })
            .collect();

        if matches.is_empty() {
            return SearchOutcome::Empty(EmptyReason::NoRecipesMatched);
        }

        // The catalog promises no ordering; sort by title so results are
        // deterministic
        matches.sort_by(|a, b| a.title.cmp(&b.title));
        SearchOutcome::Done(matches)
    }

    /// Search the public-API source.
    ///
    /// For a non-English display language the tokens are first translated
    /// (the endpoint only accepts English-ish terms) and the translated
    /// set drives both the query string and the local post-filter.
    /// Candidates are re-filtered against their own `usedIngredients`
    /// lists case-insensitively; API order is preserved.
    pub async fn match_against_public_api(
        &self,
        tokens: &[String],
        policy: MatchPolicy,
        language: &str,
    ) -> SearchOutcome<RecipeSummary> {
        if tokens.is_empty() {
            return SearchOutcome::Empty(EmptyReason::NoIngredientsRecognized);
        }

        let query_tokens = if language != SOURCE_LANGUAGE {
            self.translator.translate_batch(tokens, language).await
        } else {
            tokens.to_vec()
        };

        let candidates = match self
            .recipe_api
            .find_by_ingredients(&query_tokens, self.page_size)
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("Public recipe search failed: {}", e);
                return SearchOutcome::Failed(SearchError::FetchFailed(e));
            }
        };

        let wanted: Vec<String> = query_tokens
            .iter()
            .map(|token| token.to_lowercase())
            .collect();

        let filtered: Vec<RecipeSummary> = candidates
            .into_iter()
            .filter(|candidate| {
                let used: Vec<String> = candidate
                    .used_ingredients
                    .iter()
                    .map(|ingredient| ingredient.name.to_lowercase())
                    .collect();
                match policy {
                    MatchPolicy::Strict => wanted.iter().all(|name| used.contains(name)),
                    MatchPolicy::Loose => used.iter().any(|name| wanted.contains(name)),
                }
            })
            .collect();

        if filtered.is_empty() {
            return SearchOutcome::Empty(EmptyReason::NoRecipesMatched);
        }

        SearchOutcome::Done(filtered)
    }

    /// Fetch full detail for a selected candidate.
    ///
    /// Catalog candidates already carry full detail and need no network
    /// call. Public-API candidates need a second round-trip; if that
    /// fails the caller must not proceed with the partial summary.
    pub async fn fetch_candidate_detail(
        &self,
        candidate: &MatchCandidate,
    ) -> Result<CandidateDetail, SearchError> {
        match candidate {
            MatchCandidate::Catalog(recipe) => Ok(CandidateDetail::Catalog(recipe.clone())),
            MatchCandidate::Public(summary) => self
                .recipe_api
                .recipe_information(summary.id)
                .await
                .map(CandidateDetail::Public)
                .map_err(SearchError::FetchDetailFailed),
        }
    }
}

/// The two index-lookup forms of a query token: all-lowercase and
/// first-letter-capitalized
fn lookup_forms(token: &str) -> [String; 2] {
    let lowercased = token.to_lowercase();
    let capitalized = match lowercased.chars().next() {
        Some(first) => first.to_uppercase().collect::<String>() + &lowercased[first.len_utf8()..],
        None => String::new(),
    };
    [lowercased, capitalized]
}
