//! Ranking, tie-breaking, and confidence.
//!
//! Orders viable options descending by composite score with a stable
//! sort, then resolves runs of epsilon-close scores by the raw
//! tie-break attribute (higher first, missing last), falling back to
//! original input order. Disqualified options are appended afterward in
//! input order with their zeroed scores.
//!
//! Also derives the overall ranking confidence from the spread between
//! the top score and the runner-up, plus summary statistics over the
//! viable scores.

mod ranker;
mod types;

pub use ranker::rank_candidates;
pub use types::{RankCandidate, Ranking, ScoreStats};
