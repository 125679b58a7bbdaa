//! Criterion normalization.
//!
//! Rescales each raw attribute onto a common [0, 1] scale across the
//! viable option set, so criteria measured in different units (prices,
//! scores, ordinal levels, tag counts) become comparable before weighted
//! aggregation.
//!
//! - Numeric values: min-max over the option set; an all-equal column
//!   normalizes to 1.0 for every option (nothing to discriminate).
//! - Text values: mapped through an [`OrdinalScale`] to a level index;
//!   unknown levels fall back to the scale midpoint with a low-confidence
//!   flag.
//! - Tag lists: scored by cardinality before min-max.
//! - Lower-is-better criteria are inverted after min-max.
//! - Missing attributes normalize to the directional worst case (0) with
//!   a `missing` flag; they never abort the evaluation.

mod scaler;
mod types;

pub use scaler::normalize_criterion;
pub use types::{Direction, NormalizedValue, OrdinalScale};
