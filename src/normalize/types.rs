//! Normalization primitives: direction tags, ordinal scales, and the
//! per-option normalized value.

/// Whether larger raw values are better or worse for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Larger raw values score higher (the default).
    #[default]
    HigherIsBetter,
    /// Larger raw values score lower (prices, costs).
    LowerIsBetter,
}

/// An ordered set of categorical levels, e.g. `low < medium < high`.
///
/// Maps level names (case-insensitive) to positions for numeric
/// normalization and for ordinal-distance constraint matching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrdinalScale {
    levels: Vec<String>,
}

impl OrdinalScale {
    /// Creates a scale from levels ordered worst-to-best position.
    ///
    /// The level list must be non-empty; `EngineConfig::validate`
    /// enforces this before any evaluation runs.
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            levels: levels
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Number of levels on the scale.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when the scale has no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Position of a level on the scale, or `None` for unknown levels.
    /// Matching is case-insensitive.
    pub fn position(&self, level: &str) -> Option<usize> {
        let needle = level.to_ascii_lowercase();
        self.levels.iter().position(|l| *l == needle)
    }

    /// Midpoint position, used as the fallback for unknown levels.
    pub fn midpoint(&self) -> f64 {
        if self.levels.is_empty() {
            0.0
        } else {
            (self.levels.len() - 1) as f64 / 2.0
        }
    }

    /// Ordinal distance between two levels, or `None` when either level
    /// is not on the scale.
    pub fn distance(&self, a: &str, b: &str) -> Option<usize> {
        let pa = self.position(a)?;
        let pb = self.position(b)?;
        Some(pa.abs_diff(pb))
    }
}

impl Default for OrdinalScale {
    /// The conventional complexity scale: `low < medium < high`.
    fn default() -> Self {
        OrdinalScale::new(["low", "medium", "high"])
    }
}

/// One option's normalized value for one criterion, with degradation
/// markers carried through to the explanation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedValue {
    /// Value in [0, 1], direction-adjusted.
    pub value: f64,

    /// The attribute was absent on this option; `value` is the worst case.
    pub missing: bool,

    /// The raw value could not be interpreted on the configured scale
    /// (unknown ordinal level); `value` is a midpoint fallback.
    pub low_confidence: bool,
}

impl NormalizedValue {
    /// A clean, fully-confident normalized value.
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            missing: false,
            low_confidence: false,
        }
    }

    /// The worst-case value recorded for a missing attribute.
    pub fn absent() -> Self {
        Self {
            value: 0.0,
            missing: true,
            low_confidence: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_positions() {
        let scale = OrdinalScale::default();
        assert_eq!(scale.position("low"), Some(0));
        assert_eq!(scale.position("Medium"), Some(1));
        assert_eq!(scale.position("HIGH"), Some(2));
        assert_eq!(scale.position("extreme"), None);
    }

    #[test]
    fn test_scale_distance() {
        let scale = OrdinalScale::default();
        assert_eq!(scale.distance("low", "high"), Some(2));
        assert_eq!(scale.distance("medium", "low"), Some(1));
        assert_eq!(scale.distance("medium", "medium"), Some(0));
        assert_eq!(scale.distance("medium", "unknown"), None);
    }

    #[test]
    fn test_scale_midpoint() {
        assert!((OrdinalScale::default().midpoint() - 1.0).abs() < 1e-10);
        let five = OrdinalScale::new(["a", "b", "c", "d", "e"]);
        assert!((five.midpoint() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_scale() {
        let scale = OrdinalScale::new(["trivial", "moderate", "hard", "extreme"]);
        assert_eq!(scale.len(), 4);
        assert_eq!(scale.distance("trivial", "extreme"), Some(3));
    }
}
