//! Composite score computation for a single option.

use std::collections::BTreeMap;

use crate::normalize::NormalizedValue;

/// One criterion's share of an option's composite score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution {
    /// The criterion name.
    pub criterion: String,
    /// The option's normalized value in [0, 1] for this criterion.
    pub normalized: f64,
    /// The normalized weight assigned to this criterion.
    pub weight: f64,
    /// `weight * normalized`.
    pub contribution: f64,
}

/// Aggregated score for one option, before ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompositeScore {
    /// Weighted sum over the criteria, soft penalty already applied.
    pub score: f64,
    /// Per-criterion breakdown in criteria order.
    pub contributions: Vec<Contribution>,
    /// The option carries none of the criteria attributes; its zero
    /// score reflects absent data, not measured unfitness.
    pub insufficient_data: bool,
}

/// Combines one option's normalized per-criterion values into a
/// composite score.
///
/// `normalized` maps each criterion to this option's [`NormalizedValue`];
/// `weights` must already be normalized (see
/// [`normalize_weights`](super::normalize_weights)). A criterion with no
/// entry contributes zero. `penalty` is the filter's multiplicative
/// soft-fail factor (1.0 for a clean pass).
pub fn composite_score(
    normalized: &BTreeMap<String, NormalizedValue>,
    weights: &BTreeMap<String, f64>,
    penalty: f64,
) -> CompositeScore {
    let mut contributions = Vec::with_capacity(weights.len());
    let mut sum = 0.0;
    let mut any_present = false;

    for (criterion, &weight) in weights {
        let value = normalized
            .get(criterion)
            .copied()
            .unwrap_or_else(NormalizedValue::absent);
        if !value.missing {
            any_present = true;
        }
        let contribution = weight * value.value;
        sum += contribution;
        contributions.push(Contribution {
            criterion: criterion.clone(),
            normalized: value.value,
            weight,
            contribution,
        });
    }

    CompositeScore {
        score: sum * penalty,
        contributions,
        insufficient_data: !any_present,
    }
}
