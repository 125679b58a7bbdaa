//! Min-max normalization of one criterion across the option set.

use super::types::{Direction, NormalizedValue, OrdinalScale};
use crate::task::{AttributeValue, OptionRecord};

/// Normalizes one criterion over the given options, returning one
/// [`NormalizedValue`] per option, in order.
///
/// The slice should contain only the options participating in the scale
/// (hard-failed options are excluded by the caller so they cannot skew
/// the min/max for viable ones).
///
/// Rules:
/// - numeric attribute → the raw value;
/// - text attribute → its position on `scale`, or the scale midpoint with
///   a low-confidence flag for unknown levels;
/// - tags attribute → the tag count;
/// - absent attribute → worst case 0, flagged missing.
///
/// Present values are min-max scaled; an all-equal column yields 1.0 for
/// every present value (no information to discriminate, treat as fully
/// satisfying). `LowerIsBetter` criteria are inverted after scaling.
pub fn normalize_criterion(
    criterion: &str,
    options: &[&OptionRecord],
    direction: Direction,
    scale: &OrdinalScale,
) -> Vec<NormalizedValue> {
    let raw: Vec<Option<(f64, bool)>> = options
        .iter()
        .map(|opt| raw_value(opt.attribute(criterion), scale))
        .collect();

    let present: Vec<f64> = raw.iter().flatten().map(|(v, _)| *v).collect();
    if present.is_empty() {
        return raw.iter().map(|_| NormalizedValue::absent()).collect();
    }

    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    raw.into_iter()
        .map(|entry| match entry {
            None => NormalizedValue::absent(),
            Some((v, low_confidence)) => {
                // All-equal columns carry no ranking information; every
                // option satisfies the criterion fully, regardless of
                // direction.
                let scaled = if span <= f64::EPSILON {
                    1.0
                } else {
                    let n = (v - min) / span;
                    match direction {
                        Direction::HigherIsBetter => n,
                        Direction::LowerIsBetter => 1.0 - n,
                    }
                };
                NormalizedValue {
                    value: scaled,
                    missing: false,
                    low_confidence,
                }
            }
        })
        .collect()
}

/// Interprets a raw attribute as a scalar, with a low-confidence marker
/// for values that only map via the midpoint fallback.
fn raw_value(attr: Option<&AttributeValue>, scale: &OrdinalScale) -> Option<(f64, bool)> {
    match attr? {
        AttributeValue::Number(v) => Some((*v, false)),
        AttributeValue::Text(level) => match scale.position(level) {
            Some(pos) => Some((pos as f64, false)),
            None => Some((scale.midpoint(), true)),
        },
        AttributeValue::Tags(tags) => Some((tags.len() as f64, false)),
    }
}
