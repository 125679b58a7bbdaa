//! Engine entry point and configuration.
//!
//! [`Engine::evaluate`] is the single external operation: it validates
//! the task, runs constraint filtering, normalization, weighted
//! aggregation, ranking, and explanation, and returns a
//! [`RankedResult`] covering every input option.
//!
//! The engine is stateless and reentrant: evaluation is a pure function
//! of the task and the [`EngineConfig`], with no shared mutable state
//! across invocations. Each call builds its derived values fresh and
//! hands ownership of the result to the caller.

mod config;
mod runner;

pub use config::EngineConfig;
pub use runner::{evaluate, Engine, RankedResult, ScoredOption};
