//! Error taxonomy for the ranking engine.
//!
//! Only structurally fatal conditions are errors: a task routed to the
//! wrong engine, an empty criteria mapping, ambiguous option identity,
//! or an invalid engine configuration. Degraded inputs (missing
//! attributes, unknown ordinal levels) never abort an evaluation; they
//! are recorded in the per-option explanation instead.

use crate::task::TaskKind;
use thiserror::Error;

/// Fatal evaluation errors. No partial ranking is produced when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// The task discriminator is not [`TaskKind::Decision`].
    ///
    /// The caller routed a payload meant for a sibling capability
    /// (summarization, retrieval) to the decision engine.
    #[error("unsupported task kind `{kind}`: this engine only evaluates decision tasks")]
    UnsupportedTask {
        /// The kind that was actually supplied.
        kind: TaskKind,
    },

    /// The criteria mapping cannot drive a ranking.
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Two options share a name; identity within a task is ambiguous.
    #[error("duplicate option name `{0}`")]
    DuplicateOption(String),

    /// The engine configuration failed validation.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}
