/*!
 * Ingredient-based recipe search.
 *
 * Turns a raw comma-separated ingredient string into policy-filtered
 * candidate lists from two independent sources: the read-only catalog
 * and the public recipe-finder API. The two result lists are deliberately
 * never merged into one ranking; they are separate views.
 *
 * - `query`: raw-input parsing and the strict/loose match policy
 * - `matcher`: the per-source matching operations and outcome types
 * - `session`: stale-search guard for overlapping invocations
 */

pub use self::matcher::{
    CandidateDetail, EmptyReason, IngredientMatcher, MatchCandidate, SearchOutcome,
};
pub use self::query::{parse_query, MatchPolicy, SearchQuery};
pub use self::session::{SearchSequence, SearchTicket};

pub mod matcher;
pub mod query;
pub mod session;
