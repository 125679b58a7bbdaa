//! Constraint filtering.
//!
//! Checks each option against the user's stated preferences and produces
//! a verdict with structured reasons:
//!
//! - **Pass** — every stated constraint holds.
//! - **SoftFail** — the option is retained but a multiplicative penalty
//!   is applied to its composite score (complexity one ordinal level
//!   away from the target, an unverifiable complexity level, or an
//!   availability status differing from the preferred one).
//! - **HardFail** — the option is disqualified: excluded from the
//!   normalization scale, scored 0, but kept in the result with the
//!   failing constraint recorded (missing required features, price over
//!   the ceiling, quality under the floor, complexity two or more
//!   levels off).
//!
//! An absent constraint is never a violation; a task with empty
//! preferences passes every option.

mod checker;
mod types;

pub use checker::check_constraints;
pub use types::{ConstraintOutcome, ConstraintReason, Verdict};
