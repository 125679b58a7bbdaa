//! Evaluation pipeline.

use std::collections::BTreeMap;

use tracing::debug;

use super::config::EngineConfig;
use crate::aggregate::{composite_score, normalize_weights, CompositeScore};
use crate::error::EvaluateError;
use crate::explain::{build_explanation, Explanation};
use crate::filter::{check_constraints, Verdict};
use crate::normalize::{normalize_criterion, NormalizedValue};
use crate::rank::{rank_candidates, RankCandidate, ScoreStats};
use crate::task::{ensure_unique_names, DecisionTask, TaskKind};

/// One option with its derived score, rank, verdict, and rationale.
///
/// Created fresh per evaluation; the caller owns it afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredOption {
    /// The source option's name.
    pub name: String,
    /// Composite score (0 for disqualified options).
    pub score: f64,
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Constraint verdict from the filter.
    pub verdict: Verdict,
    /// Structured rationale.
    pub explanation: Explanation,
}

/// The ordered evaluation result, best option first.
///
/// Always contains one entry per input option: disqualified options
/// appear at the end with score 0 rather than being dropped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    /// Scored options, best first.
    pub options: Vec<ScoredOption>,
    /// How decisively the top option outperforms the runner-up, in
    /// [0, 1]. 1.0 for a sole survivor, 0.0 when nothing survives.
    pub ranking_confidence: f64,
    /// Summary statistics over viable composite scores.
    pub stats: ScoreStats,
}

impl RankedResult {
    /// The top-ranked option, if any options were supplied.
    pub fn best(&self) -> Option<&ScoredOption> {
        self.options.first()
    }
}

/// The decision-scoring engine.
///
/// Stateless apart from its configuration; [`Engine::evaluate`] is a
/// pure function of the task, so a single engine can be shared and
/// reused freely.
///
/// # Examples
///
/// ```
/// use rankwise::engine::Engine;
/// use rankwise::task::{DecisionTask, OptionRecord};
///
/// let task = DecisionTask::decision(vec![
///     OptionRecord::new("A").with_attribute("novelty", 0.8),
///     OptionRecord::new("B").with_attribute("novelty", 0.3),
/// ])
/// .with_criterion("novelty", 1.0);
///
/// let result = Engine::default().evaluate(&task).unwrap();
/// assert_eq!(result.best().unwrap().name, "A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluates a decision task into a ranked, explained result.
    ///
    /// Fatal conditions ([`EvaluateError`]) abort with no partial
    /// ranking. Degraded inputs (missing attributes, unknown ordinal
    /// levels) never abort; they are recorded in the per-option
    /// explanations.
    pub fn evaluate(&self, task: &DecisionTask) -> Result<RankedResult, EvaluateError> {
        self.config
            .validate()
            .map_err(EvaluateError::InvalidConfig)?;

        if task.kind != TaskKind::Decision {
            return Err(EvaluateError::UnsupportedTask { kind: task.kind });
        }
        if task.criteria.is_empty() {
            return Err(EvaluateError::InvalidCriteria(
                "criteria mapping is empty".into(),
            ));
        }
        ensure_unique_names(&task.options)?;

        debug!(
            options = task.options.len(),
            criteria = task.criteria.len(),
            "evaluating decision task"
        );

        // Constraint filtering. Hard-failed options keep their outcome
        // but take no part in normalization.
        let outcomes: Vec<_> = task
            .options
            .iter()
            .map(|opt| {
                check_constraints(
                    opt,
                    &task.preferences,
                    &self.config.ordinal_scale,
                    self.config.soft_penalty,
                )
            })
            .collect();

        let viable_indices: Vec<usize> = (0..task.options.len())
            .filter(|&i| !outcomes[i].is_hard_fail())
            .collect();
        let viable_options: Vec<_> = viable_indices.iter().map(|&i| &task.options[i]).collect();

        // Normalize each criterion across the viable set, then regroup
        // the per-criterion columns into a per-option map.
        let weights = normalize_weights(&task.criteria);
        let mut per_option: Vec<BTreeMap<String, NormalizedValue>> =
            vec![BTreeMap::new(); viable_options.len()];
        for criterion in weights.keys() {
            let column = normalize_criterion(
                criterion,
                &viable_options,
                self.config.direction(criterion),
                &self.config.ordinal_scale,
            );
            for (slot, value) in per_option.iter_mut().zip(column) {
                slot.insert(criterion.clone(), value);
            }
        }

        // Aggregate viable options; disqualified ones score 0.
        let mut composites: Vec<Option<CompositeScore>> = vec![None; task.options.len()];
        for (pos, &index) in viable_indices.iter().enumerate() {
            composites[index] = Some(composite_score(
                &per_option[pos],
                &weights,
                outcomes[index].penalty,
            ));
        }

        let candidates: Vec<RankCandidate> = task
            .options
            .iter()
            .enumerate()
            .map(|(index, opt)| RankCandidate {
                index,
                score: composites[index].as_ref().map_or(0.0, |c| c.score),
                hard_fail: outcomes[index].is_hard_fail(),
                tie_break: opt.number(&self.config.tie_break_attribute),
            })
            .collect();

        let ranking = rank_candidates(&candidates, self.config.epsilon);

        // Assemble the result in rank order, one entry per input option.
        let empty = BTreeMap::new();
        let scored = ranking
            .order
            .iter()
            .enumerate()
            .map(|(pos, &index)| {
                let normalized = viable_indices
                    .iter()
                    .position(|&i| i == index)
                    .map_or(&empty, |p| &per_option[p]);
                let composite = composites[index].clone().unwrap_or(CompositeScore {
                    score: 0.0,
                    contributions: Vec::new(),
                    insufficient_data: false,
                });
                ScoredOption {
                    name: task.options[index].name.clone(),
                    score: composite.score,
                    rank: pos + 1,
                    verdict: outcomes[index].verdict,
                    explanation: build_explanation(&composite, &outcomes[index], normalized),
                }
            })
            .collect();

        debug!(
            viable = ranking.stats.viable,
            confidence = ranking.confidence,
            "ranking complete"
        );

        Ok(RankedResult {
            options: scored,
            ranking_confidence: ranking.confidence,
            stats: ranking.stats,
        })
    }
}

/// Evaluates a task with the default [`EngineConfig`].
pub fn evaluate(task: &DecisionTask) -> Result<RankedResult, EvaluateError> {
    Engine::default().evaluate(task)
}
