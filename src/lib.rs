//! Multi-criteria decision ranking engine.
//!
//! Ranks a set of candidate options against user preferences and
//! weighted criteria, producing a scored, explained ranking:
//!
//! - **Constraint filtering**: required features, a price ceiling, and a
//!   target complexity level split options into pass, soft-fail
//!   (penalized), and hard-fail (disqualified but still reported).
//! - **Normalization**: every criterion is min-max rescaled onto [0, 1]
//!   across the viable options, direction-aware (price is
//!   lower-is-better) and tolerant of missing or unrecognized values.
//! - **Weighted aggregation**: normalized values combine into one
//!   composite score per option; weights are rescaled to sum to 1.
//! - **Ranking**: stable descending sort with impact-based tie-breaking
//!   and a confidence metric derived from the top-two score gap.
//! - **Explanation**: a structured per-option rationale (contribution
//!   breakdown, constraint findings, degradation flags). Fields, not
//!   prose.
//!
//! # Architecture
//!
//! Evaluation is a single-shot, stateless computation: one call to
//! [`engine::Engine::evaluate`] (or the [`engine::evaluate`] shorthand)
//! per task, no shared state across calls, no I/O. The surrounding
//! orchestration (sibling agents, memory layers, transports) lives
//! outside this crate and only exchanges [`task::DecisionTask`] and
//! [`engine::RankedResult`] values with it.
//!
//! # Examples
//!
//! ```
//! use rankwise::engine::evaluate;
//! use rankwise::task::{DecisionTask, OptionRecord, Preferences};
//!
//! let task = DecisionTask::decision(vec![
//!     OptionRecord::new("A")
//!         .with_attribute("novelty", 0.8)
//!         .with_attribute("price", 100.0),
//!     OptionRecord::new("B")
//!         .with_attribute("novelty", 0.3)
//!         .with_attribute("price", 200.0),
//! ])
//! .with_preferences(Preferences::new().with_max_price(150.0))
//! .with_criterion("novelty", 1.0);
//!
//! let result = evaluate(&task).unwrap();
//! assert_eq!(result.best().unwrap().name, "A");
//! ```

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod explain;
pub mod filter;
pub mod normalize;
pub mod rank;
pub mod task;
