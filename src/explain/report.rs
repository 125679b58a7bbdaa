//! Per-option explanation building.

use std::collections::BTreeMap;

use crate::aggregate::{CompositeScore, Contribution};
use crate::filter::{ConstraintOutcome, ConstraintReason};
use crate::normalize::NormalizedValue;

/// Structured rationale for one scored option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explanation {
    /// Per-criterion contributions, sorted by |contribution| descending
    /// (stable: equal magnitudes keep criteria order).
    pub contributions: Vec<Contribution>,

    /// Constraint findings from the filter. Empty for a clean pass.
    pub constraint_reasons: Vec<ConstraintReason>,

    /// Multiplicative penalty applied to the composite score (1.0 when
    /// none).
    pub penalty: f64,

    /// Required features the option carries.
    pub matched_features: Vec<String>,

    /// Criteria whose attribute was absent on this option (worst-case
    /// scored).
    pub missing_attributes: Vec<String>,

    /// Criteria whose value only mapped via the midpoint fallback
    /// (unknown ordinal level).
    pub low_confidence_attributes: Vec<String>,

    /// The option carried none of the criteria attributes; its score is
    /// zero for lack of data, not measured unfitness.
    pub insufficient_data: bool,
}

/// Assembles the explanation for one option from upstream outputs.
///
/// `normalized` maps each criterion to the option's [`NormalizedValue`]
/// (absent for disqualified options, which carry no normalized values).
pub fn build_explanation(
    composite: &CompositeScore,
    outcome: &ConstraintOutcome,
    normalized: &BTreeMap<String, NormalizedValue>,
) -> Explanation {
    let mut contributions = composite.contributions.clone();
    contributions.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let missing_attributes: Vec<String> = normalized
        .iter()
        .filter(|(_, v)| v.missing)
        .map(|(k, _)| k.clone())
        .collect();
    let low_confidence_attributes: Vec<String> = normalized
        .iter()
        .filter(|(_, v)| v.low_confidence)
        .map(|(k, _)| k.clone())
        .collect();

    Explanation {
        contributions,
        constraint_reasons: outcome.reasons.clone(),
        penalty: outcome.penalty,
        matched_features: outcome.matched_features.clone(),
        missing_attributes,
        low_confidence_attributes,
        insufficient_data: composite.insufficient_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Verdict;

    fn contribution(criterion: &str, weight: f64, normalized: f64) -> Contribution {
        Contribution {
            criterion: criterion.to_string(),
            normalized,
            weight,
            contribution: weight * normalized,
        }
    }

    #[test]
    fn test_contributions_sorted_by_magnitude() {
        let composite = CompositeScore {
            score: 0.7,
            contributions: vec![
                contribution("novelty", 0.4, 0.5),  // 0.2
                contribution("impact", 0.6, 1.0),   // 0.6
                contribution("cost", 0.0, 1.0),     // 0.0
            ],
            insufficient_data: false,
        };
        let explanation =
            build_explanation(&composite, &ConstraintOutcome::pass(), &BTreeMap::new());

        let order: Vec<&str> = explanation
            .contributions
            .iter()
            .map(|c| c.criterion.as_str())
            .collect();
        assert_eq!(order, vec!["impact", "novelty", "cost"]);
    }

    #[test]
    fn test_degradation_flags_carried() {
        let mut normalized = BTreeMap::new();
        normalized.insert("novelty".to_string(), NormalizedValue::absent());
        normalized.insert(
            "complexity".to_string(),
            NormalizedValue {
                value: 0.5,
                missing: false,
                low_confidence: true,
            },
        );

        let composite = CompositeScore {
            score: 0.0,
            contributions: vec![],
            insufficient_data: false,
        };
        let explanation =
            build_explanation(&composite, &ConstraintOutcome::pass(), &normalized);

        assert_eq!(explanation.missing_attributes, vec!["novelty".to_string()]);
        assert_eq!(
            explanation.low_confidence_attributes,
            vec!["complexity".to_string()]
        );
    }

    #[test]
    fn test_constraint_findings_carried() {
        let outcome = ConstraintOutcome {
            verdict: Verdict::SoftFail,
            reasons: vec![ConstraintReason::ComplexityMismatch {
                target: "medium".into(),
                actual: "high".into(),
                distance: 1,
            }],
            penalty: 0.8,
            matched_features: vec!["core".into()],
        };
        let composite = CompositeScore {
            score: 0.4,
            contributions: vec![],
            insufficient_data: false,
        };
        let explanation = build_explanation(&composite, &outcome, &BTreeMap::new());

        assert_eq!(explanation.constraint_reasons.len(), 1);
        assert!((explanation.penalty - 0.8).abs() < 1e-10);
        assert_eq!(explanation.matched_features, vec!["core".to_string()]);
    }
}
