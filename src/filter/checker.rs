//! Constraint evaluation for a single option.

use super::types::{ConstraintOutcome, ConstraintReason, Verdict};
use crate::normalize::OrdinalScale;
use crate::task::{
    OptionRecord, Preferences, ATTR_AVAILABILITY, ATTR_COMPLEXITY, ATTR_FEATURES, ATTR_PRICE,
    ATTR_QUALITY,
};

/// Checks one option against the stated preferences.
///
/// `soft_penalty` is the multiplicative factor recorded on a
/// [`Verdict::SoftFail`] outcome; `scale` drives ordinal distance for
/// the complexity constraint.
///
/// Hard failures: any missing required feature, price above the
/// inclusive ceiling, quality below the inclusive floor (either bound
/// unverifiable counts as violated), complexity two or more levels from
/// the target. Soft failure: complexity exactly one level away, a
/// complexity level that cannot be placed on the scale, or an
/// availability status differing from the preferred one. All findings
/// are recorded, even past the first hard failure, so the explanation
/// lists every violated constraint.
pub fn check_constraints(
    option: &OptionRecord,
    prefs: &Preferences,
    scale: &OrdinalScale,
    soft_penalty: f64,
) -> ConstraintOutcome {
    if prefs.is_empty() {
        return ConstraintOutcome::pass();
    }

    let mut reasons = Vec::new();
    let mut verdict = Verdict::Pass;
    let mut penalty = 1.0;
    let mut matched_features = Vec::new();

    if !prefs.required_features.is_empty() {
        let features = option.tags(ATTR_FEATURES).unwrap_or(&[]);
        let (matched, missing): (Vec<String>, Vec<String>) = prefs
            .required_features
            .iter()
            .cloned()
            .partition(|required| features.iter().any(|f| f == required));
        matched_features = matched.clone();
        if !missing.is_empty() {
            verdict = Verdict::HardFail;
            reasons.push(ConstraintReason::MissingFeatures { missing, matched });
        }
    }

    if let Some(max_price) = prefs.max_price {
        match option.number(ATTR_PRICE) {
            Some(price) if price > max_price => {
                verdict = Verdict::HardFail;
                reasons.push(ConstraintReason::PriceExceeded { price, max_price });
            }
            Some(_) => {}
            None => {
                // A hard budget that cannot be verified is treated as
                // violated rather than silently waived.
                verdict = Verdict::HardFail;
                reasons.push(ConstraintReason::PriceUnknown { max_price });
            }
        }
    }

    if let Some(min_quality) = prefs.min_quality {
        match option.number(ATTR_QUALITY) {
            Some(quality) if quality < min_quality => {
                verdict = Verdict::HardFail;
                reasons.push(ConstraintReason::QualityBelowMinimum {
                    quality,
                    min_quality,
                });
            }
            Some(_) => {}
            None => {
                verdict = Verdict::HardFail;
                reasons.push(ConstraintReason::QualityUnknown { min_quality });
            }
        }
    }

    if let Some(target) = &prefs.complexity {
        let actual = option.text(ATTR_COMPLEXITY);
        match actual.and_then(|level| scale.distance(level, target)) {
            Some(0) => {}
            Some(1) => {
                if verdict == Verdict::Pass {
                    verdict = Verdict::SoftFail;
                    penalty = soft_penalty;
                }
                reasons.push(ConstraintReason::ComplexityMismatch {
                    target: target.clone(),
                    actual: actual.unwrap_or_default().to_string(),
                    distance: 1,
                });
            }
            Some(distance) => {
                verdict = Verdict::HardFail;
                reasons.push(ConstraintReason::ComplexityMismatch {
                    target: target.clone(),
                    actual: actual.unwrap_or_default().to_string(),
                    distance,
                });
            }
            // Absent level, level off the scale, or target off the scale:
            // the distance is unverifiable. Retain with the penalty.
            None => {
                if verdict == Verdict::Pass {
                    verdict = Verdict::SoftFail;
                    penalty = soft_penalty;
                }
                reasons.push(ConstraintReason::ComplexityUnknown {
                    target: target.clone(),
                    actual: actual.map(str::to_string),
                });
            }
        }
    }

    if let Some(preferred) = &prefs.availability {
        let actual = option.text(ATTR_AVAILABILITY);
        if !actual.is_some_and(|status| status.eq_ignore_ascii_case(preferred)) {
            if verdict == Verdict::Pass {
                verdict = Verdict::SoftFail;
                penalty = soft_penalty;
            }
            reasons.push(ConstraintReason::AvailabilityMismatch {
                preferred: preferred.clone(),
                actual: actual.map(str::to_string),
            });
        }
    }

    if verdict == Verdict::HardFail {
        penalty = 1.0; // hard fails are zeroed, never penalized
    }

    ConstraintOutcome {
        verdict,
        reasons,
        penalty,
        matched_features,
    }
}
