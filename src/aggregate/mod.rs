//! Weighted aggregation.
//!
//! Combines an option's normalized per-criterion values into one
//! composite score using the user's criteria weights. Weights are
//! normalized to sum to 1 before use (clamping negatives to zero), so
//! rescaling every weight by the same factor never changes a score. An
//! all-zero mapping falls back to equal weighting across the provided
//! criteria.
//!
//! A soft-constraint penalty from the filter is applied multiplicatively
//! after the weighted sum.

mod combiner;
mod weights;

pub use combiner::{composite_score, CompositeScore, Contribution};
pub use weights::normalize_weights;
