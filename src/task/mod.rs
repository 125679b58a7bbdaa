//! Task payload: options, preferences, and criteria weights.
//!
//! A [`DecisionTask`] is the single input to the engine. Options carry a
//! unique name plus an open-ended attribute map; criteria reference those
//! attributes by name and assign each a non-negative weight. Preferences
//! express hard and soft constraints (required features, a price ceiling,
//! a quality floor, a target complexity level, a preferred availability
//! status).
//!
//! # Design
//!
//! Option attributes are duck-typed in the upstream pipeline; here they
//! are a typed mapping from attribute name to [`AttributeValue`], with
//! explicit numeric, text, and tag-list variants. Records are immutable
//! inputs — every derived value lives in a separate structure, never
//! written back into the option.

mod types;
mod validate;

pub use types::{
    AttributeValue, DecisionTask, OptionRecord, Preferences, TaskKind, ATTR_AVAILABILITY,
    ATTR_COMPLEXITY, ATTR_FEATURES, ATTR_PRICE, ATTR_QUALITY,
};
pub use validate::ensure_unique_names;
