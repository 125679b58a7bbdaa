//! Criteria weight normalization.

use std::collections::BTreeMap;

/// Normalizes a criteria weight mapping so the weights sum to 1.
///
/// Negative weights are clamped to zero first. When everything clamps
/// to zero (or the mapping was all zeros), falls back to equal weighting
/// across the provided criteria so a ranking can still be produced.
///
/// The caller guarantees a non-empty mapping; the engine rejects empty
/// criteria before aggregation runs.
pub fn normalize_weights(criteria: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let clamped: BTreeMap<&str, f64> = criteria
        .iter()
        .map(|(k, w)| (k.as_str(), w.max(0.0)))
        .collect();

    let total: f64 = clamped.values().sum();
    if total <= f64::EPSILON {
        let equal = 1.0 / criteria.len() as f64;
        return criteria.keys().map(|k| (k.clone(), equal)).collect();
    }

    clamped
        .into_iter()
        .map(|(k, w)| (k.to_string(), w / total))
        .collect()
}
