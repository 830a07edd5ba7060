/*!
 * Tests for the ingredient matcher: per-source matching, policy
 * semantics, and failure classification
 */

use std::sync::Arc;

use mealmatch::catalog::MemoryCatalog;
use mealmatch::errors::SearchError;
use mealmatch::search::{EmptyReason, IngredientMatcher, MatchCandidate, MatchPolicy, SearchOutcome};
use mealmatch::storage::StoreConnection;
use mealmatch::translation::{TranslationCache, TranslationService};

use crate::common::mock_providers::{MockRecipeApi, MockTranslationApi};
use crate::common::{recipe_detail, recipe_summary, sample_catalog};

struct TestSetup {
    matcher: IngredientMatcher,
    recipe_api: Arc<MockRecipeApi>,
    translation_api: Arc<MockTranslationApi>,
}

fn setup_with_catalog(catalog: MemoryCatalog) -> TestSetup {
    crate::common::init_logging();

    let store = StoreConnection::new_in_memory().expect("Failed to create in-memory store");
    let translation_api = Arc::new(MockTranslationApi::new());
    let translator =
        TranslationService::new(translation_api.clone(), TranslationCache::new(store));
    let recipe_api = Arc::new(MockRecipeApi::new());

    TestSetup {
        matcher: IngredientMatcher::new(Arc::new(catalog), recipe_api.clone(), translator),
        recipe_api,
        translation_api,
    }
}

fn setup() -> TestSetup {
    setup_with_catalog(sample_catalog())
}

fn tokens(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

// -- catalog source --

#[tokio::test]
async fn test_matchAgainstCatalog_withLoosePolicy_shouldMatchAnyIngredient() {
    let setup = setup();

    let outcome = setup
        .matcher
        .match_against_catalog(&tokens(&["rice", "garlic"]), MatchPolicy::Loose)
        .await;

    let matches = outcome.candidates().expect("Expected matches");
    let titles: Vec<&str> = matches.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Chicken risotto", "Fried rice", "Garlic bread"]);
}

#[tokio::test]
async fn test_matchAgainstCatalog_withStrictPolicy_shouldRequireEveryIngredient() {
    let setup = setup();

    let outcome = setup
        .matcher
        .match_against_catalog(&tokens(&["rice", "garlic"]), MatchPolicy::Strict)
        .await;

    let matches = outcome.candidates().expect("Expected matches");
    let titles: Vec<&str> = matches.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Chicken risotto"]);
}

#[tokio::test]
async fn test_matchAgainstCatalog_shouldRecognizeBothIndexCasings() {
    let setup = setup();

    // "chicken" is stored as "Chicken", "rice" as "rice"; both casings
    // of the query must be recognized
    let outcome = setup
        .matcher
        .match_against_catalog(&tokens(&["CHICKEN", "Rice"]), MatchPolicy::Strict)
        .await;

    let matches = outcome.candidates().expect("Expected matches");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Chicken risotto");
}

#[tokio::test]
async fn test_matchAgainstCatalog_withUnknownIngredients_shouldReportNoneRecognized() {
    let setup = setup();

    let outcome = setup
        .matcher
        .match_against_catalog(&tokens(&["dragonfruit"]), MatchPolicy::Loose)
        .await;

    assert!(matches!(
        outcome,
        SearchOutcome::Empty(EmptyReason::NoIngredientsRecognized)
    ));
}

#[tokio::test]
async fn test_matchAgainstCatalog_withRecognizedButUnmatchedIngredients_shouldReportNoMatches() {
    let setup = setup();

    // "egg" is in the index but no recipe contains both egg and garlic
    let outcome = setup
        .matcher
        .match_against_catalog(&tokens(&["egg", "garlic"]), MatchPolicy::Strict)
        .await;

    assert!(matches!(
        outcome,
        SearchOutcome::Empty(EmptyReason::NoRecipesMatched)
    ));
}

#[tokio::test]
async fn test_matchAgainstCatalog_withNoTokens_shouldSkipAllLookups() {
    let setup = setup();

    let outcome = setup
        .matcher
        .match_against_catalog(&[], MatchPolicy::Loose)
        .await;

    assert!(matches!(
        outcome,
        SearchOutcome::Empty(EmptyReason::NoIngredientsRecognized)
    ));
}

// -- public-API source --

#[tokio::test]
async fn test_matchAgainstPublicApi_shouldFilterCandidatesAgainstUsedIngredients() {
    let setup = setup();
    setup.recipe_api.script_summaries(vec![
        recipe_summary(1, "Chicken rice bowl", &["chicken", "rice"]),
        recipe_summary(2, "Plain bread", &[]),
        recipe_summary(3, "Rice pudding", &["Rice"]),
    ]);

    let outcome = setup
        .matcher
        .match_against_public_api(&tokens(&["chicken", "rice"]), MatchPolicy::Loose, "en")
        .await;

    // Candidate 2 used none of the query ingredients and must be dropped
    // regardless of the API having returned it; casing is ignored
    let matches = outcome.candidates().expect("Expected matches");
    let ids: Vec<u64> = matches.iter().map(|summary| summary.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_matchAgainstPublicApi_withStrictPolicy_shouldRequireEveryIngredientUsed() {
    let setup = setup();
    setup.recipe_api.script_summaries(vec![
        recipe_summary(1, "Chicken rice bowl", &["chicken", "rice"]),
        recipe_summary(3, "Rice pudding", &["rice"]),
    ]);

    let outcome = setup
        .matcher
        .match_against_public_api(&tokens(&["chicken", "rice"]), MatchPolicy::Strict, "en")
        .await;

    let matches = outcome.candidates().expect("Expected matches");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, 1);
}

#[tokio::test]
async fn test_matchAgainstPublicApi_withEnglishDisplay_shouldNotTranslate() {
    let setup = setup();
    setup
        .recipe_api
        .script_summaries(vec![recipe_summary(1, "Chicken rice bowl", &["chicken"])]);

    setup
        .matcher
        .match_against_public_api(&tokens(&["chicken"]), MatchPolicy::Loose, "en")
        .await;

    assert_eq!(setup.translation_api.tracker().lock().unwrap().call_count, 0);
}

#[tokio::test]
async fn test_matchAgainstPublicApi_withNonEnglishDisplay_shouldQueryWithTranslatedTokens() {
    let setup = setup();
    setup.translation_api.script("piletina", "chicken");
    setup
        .recipe_api
        .script_summaries(vec![recipe_summary(1, "Chicken rice bowl", &["chicken"])]);

    let outcome = setup
        .matcher
        .match_against_public_api(&tokens(&["piletina"]), MatchPolicy::Loose, "hr")
        .await;

    // The endpoint saw the translated token and the post-filter compared
    // against the translated set too
    let last_request = setup
        .recipe_api
        .tracker()
        .lock()
        .unwrap()
        .last_request
        .clone();
    assert_eq!(last_request.as_deref(), Some("ingredients=chicken;number=10"));
    assert!(outcome.candidates().is_some());
}

#[tokio::test]
async fn test_matchAgainstPublicApi_withFailingEndpoint_shouldClassifyAsFetchFailure() {
    let setup = setup();
    setup.recipe_api.fail_all_calls();

    let outcome = setup
        .matcher
        .match_against_public_api(&tokens(&["chicken"]), MatchPolicy::Loose, "en")
        .await;

    assert!(matches!(
        outcome,
        SearchOutcome::Failed(SearchError::FetchFailed(_))
    ));
}

#[tokio::test]
async fn test_matchAgainstPublicApi_withNoTokens_shouldSkipNetworkEntirely() {
    let setup = setup();

    let outcome = setup
        .matcher
        .match_against_public_api(&[], MatchPolicy::Loose, "en")
        .await;

    assert!(matches!(
        outcome,
        SearchOutcome::Empty(EmptyReason::NoIngredientsRecognized)
    ));
    assert_eq!(setup.recipe_api.tracker().lock().unwrap().call_count, 0);
}

// -- candidate detail --

#[tokio::test]
async fn test_fetchCandidateDetail_withCatalogCandidate_shouldNeedNoNetwork() {
    let setup = setup();
    let recipe = crate::common::catalog_recipe("r1", "Chicken risotto", &["Chicken"]);

    let detail = setup
        .matcher
        .fetch_candidate_detail(&MatchCandidate::Catalog(recipe))
        .await
        .expect("Catalog detail should not fail");

    assert!(matches!(
        detail,
        mealmatch::search::CandidateDetail::Catalog(_)
    ));
    assert_eq!(setup.recipe_api.tracker().lock().unwrap().call_count, 0);
}

#[tokio::test]
async fn test_fetchCandidateDetail_withPublicCandidate_shouldFetchInformation() {
    let setup = setup();
    setup
        .recipe_api
        .script_detail(recipe_detail(7, "Rice pudding", &["rice", "milk"]));

    let detail = setup
        .matcher
        .fetch_candidate_detail(&MatchCandidate::Public(recipe_summary(
            7,
            "Rice pudding",
            &["rice"],
        )))
        .await
        .expect("Detail fetch should succeed");

    match detail {
        mealmatch::search::CandidateDetail::Public(recipe) => {
            assert_eq!(recipe.id, 7);
            assert_eq!(recipe.extended_ingredients.len(), 2);
        }
        other => panic!("Expected public detail, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetchCandidateDetail_withFailingEndpoint_shouldClassifyAsDetailFailure() {
    let setup = setup();
    setup.recipe_api.fail_all_calls();

    let result = setup
        .matcher
        .fetch_candidate_detail(&MatchCandidate::Public(recipe_summary(
            7,
            "Rice pudding",
            &["rice"],
        )))
        .await;

    assert!(matches!(result, Err(SearchError::FetchDetailFailed(_))));
}
