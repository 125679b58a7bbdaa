//! Structured rationale assembly.
//!
//! Collects the outputs of filtering, normalization, and aggregation
//! into a per-option [`Explanation`]: the contribution breakdown sorted
//! by magnitude, the constraint findings, the applied penalty, and the
//! degradation flags. Purely derived — the explainer performs no new
//! computation and never generates prose.

mod report;

pub use report::{build_explanation, Explanation};
