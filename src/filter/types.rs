//! Verdicts and structured constraint reasons.

use std::fmt;

/// Outcome category of constraint checking for one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// All stated constraints hold.
    Pass,
    /// Retained with a multiplicative score penalty.
    SoftFail,
    /// Disqualified; scored 0 and excluded from normalization.
    HardFail,
}

/// A single structured constraint finding.
///
/// These are rationale fields, not prose: the caller renders them
/// however it likes (the `Display` impls are debugging aids).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "constraint"))]
pub enum ConstraintReason {
    /// Required features absent from the option's feature set.
    MissingFeatures {
        /// Required features the option lacks.
        missing: Vec<String>,
        /// Required features the option does carry.
        matched: Vec<String>,
    },

    /// The option's price exceeds the stated ceiling.
    PriceExceeded {
        /// The option's price.
        price: f64,
        /// The inclusive ceiling.
        max_price: f64,
    },

    /// A price ceiling is stated but the option has no numeric price, so
    /// the hard budget cannot be verified.
    PriceUnknown {
        /// The inclusive ceiling.
        max_price: f64,
    },

    /// The option's quality falls below the stated floor.
    QualityBelowMinimum {
        /// The option's quality.
        quality: f64,
        /// The inclusive floor.
        min_quality: f64,
    },

    /// A quality floor is stated but the option has no numeric quality,
    /// so the hard requirement cannot be verified.
    QualityUnknown {
        /// The inclusive floor.
        min_quality: f64,
    },

    /// The option's complexity level is a given ordinal distance from
    /// the target.
    ComplexityMismatch {
        /// The preferred level.
        target: String,
        /// The option's level.
        actual: String,
        /// Ordinal distance on the configured scale.
        distance: usize,
    },

    /// A target complexity is stated but the option's level is absent or
    /// not on the configured scale.
    ComplexityUnknown {
        /// The preferred level.
        target: String,
        /// The option's level, when present but unrecognized.
        actual: Option<String>,
    },

    /// The option's availability differs from (or lacks) the preferred
    /// status.
    AvailabilityMismatch {
        /// The preferred status.
        preferred: String,
        /// The option's status, when stated.
        actual: Option<String>,
    },
}

impl fmt::Display for ConstraintReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintReason::MissingFeatures { missing, .. } => {
                write!(f, "missing required features: {}", missing.join(", "))
            }
            ConstraintReason::PriceExceeded { price, max_price } => {
                write!(f, "price {price} exceeds maximum {max_price}")
            }
            ConstraintReason::PriceUnknown { max_price } => {
                write!(f, "no numeric price to check against maximum {max_price}")
            }
            ConstraintReason::QualityBelowMinimum {
                quality,
                min_quality,
            } => {
                write!(f, "quality {quality} is below minimum {min_quality}")
            }
            ConstraintReason::QualityUnknown { min_quality } => {
                write!(f, "no numeric quality to check against minimum {min_quality}")
            }
            ConstraintReason::ComplexityMismatch {
                target,
                actual,
                distance,
            } => write!(
                f,
                "complexity `{actual}` is {distance} level(s) from target `{target}`"
            ),
            ConstraintReason::ComplexityUnknown { target, actual } => match actual {
                Some(level) => write!(f, "complexity `{level}` not on the scale (target `{target}`)"),
                None => write!(f, "no complexity level stated (target `{target}`)"),
            },
            ConstraintReason::AvailabilityMismatch { preferred, actual } => match actual {
                Some(status) => {
                    write!(f, "availability `{status}` differs from preferred `{preferred}`")
                }
                None => write!(f, "no availability stated (preferred `{preferred}`)"),
            },
        }
    }
}

/// Full result of constraint checking for one option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintOutcome {
    /// The verdict.
    pub verdict: Verdict,

    /// Structured findings behind the verdict. Empty for a clean pass.
    pub reasons: Vec<ConstraintReason>,

    /// Multiplicative factor applied to the composite score. 1.0 unless
    /// the verdict is [`Verdict::SoftFail`].
    pub penalty: f64,

    /// Required features the option does carry (empty when no feature
    /// requirement is stated).
    pub matched_features: Vec<String>,
}

impl ConstraintOutcome {
    /// A clean pass with no findings.
    pub fn pass() -> Self {
        Self {
            verdict: Verdict::Pass,
            reasons: Vec::new(),
            penalty: 1.0,
            matched_features: Vec::new(),
        }
    }

    /// True when the option is disqualified.
    pub fn is_hard_fail(&self) -> bool {
        self.verdict == Verdict::HardFail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display() {
        let reason = ConstraintReason::PriceExceeded {
            price: 200.0,
            max_price: 150.0,
        };
        assert_eq!(reason.to_string(), "price 200 exceeds maximum 150");

        let reason = ConstraintReason::MissingFeatures {
            missing: vec!["core".into(), "gpu".into()],
            matched: vec![],
        };
        assert!(reason.to_string().contains("core, gpu"));
    }

    #[test]
    fn test_pass_outcome() {
        let outcome = ConstraintOutcome::pass();
        assert_eq!(outcome.verdict, Verdict::Pass);
        assert!(outcome.reasons.is_empty());
        assert!((outcome.penalty - 1.0).abs() < 1e-10);
    }
}
