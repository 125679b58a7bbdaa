//! Engine configuration.

use std::collections::BTreeMap;

use crate::normalize::{Direction, OrdinalScale};
use crate::task::{ATTR_COMPLEXITY, ATTR_PRICE};

/// Configuration for the ranking engine.
///
/// # Examples
///
/// ```
/// use rankwise::engine::EngineConfig;
/// use rankwise::normalize::Direction;
///
/// let config = EngineConfig::default()
///     .with_soft_penalty(0.9)
///     .with_direction("latency", Direction::LowerIsBetter);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Multiplicative factor applied to soft-failed options, in [0, 1].
    pub soft_penalty: f64,

    /// Tolerance for score comparison during tie-breaking.
    pub epsilon: f64,

    /// Ordinal scale for categorical levels, used both for normalizing
    /// text attributes and for complexity-distance constraint matching.
    pub ordinal_scale: OrdinalScale,

    /// Per-criterion direction overrides. Criteria not listed here are
    /// higher-is-better.
    pub directions: BTreeMap<String, Direction>,

    /// Attribute consulted to break score ties (higher raw value wins).
    pub tie_break_attribute: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut directions = BTreeMap::new();
        directions.insert(ATTR_PRICE.to_string(), Direction::LowerIsBetter);
        directions.insert("cost".to_string(), Direction::LowerIsBetter);
        directions.insert(ATTR_COMPLEXITY.to_string(), Direction::LowerIsBetter);

        Self {
            soft_penalty: 0.8,
            epsilon: 1e-9,
            ordinal_scale: OrdinalScale::default(),
            directions,
            tie_break_attribute: "research_impact".to_string(),
        }
    }
}

impl EngineConfig {
    /// Sets the soft-fail penalty factor.
    pub fn with_soft_penalty(mut self, penalty: f64) -> Self {
        self.soft_penalty = penalty;
        self
    }

    /// Sets the tie-breaking epsilon.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Replaces the ordinal scale.
    pub fn with_ordinal_scale(mut self, scale: OrdinalScale) -> Self {
        self.ordinal_scale = scale;
        self
    }

    /// Sets the direction for one criterion.
    pub fn with_direction(mut self, criterion: impl Into<String>, direction: Direction) -> Self {
        self.directions.insert(criterion.into(), direction);
        self
    }

    /// Sets the tie-break attribute.
    pub fn with_tie_break_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.tie_break_attribute = attribute.into();
        self
    }

    /// Direction for a criterion (higher-is-better unless overridden).
    pub fn direction(&self, criterion: &str) -> Direction {
        self.directions
            .get(criterion)
            .copied()
            .unwrap_or_default()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.soft_penalty) {
            return Err(format!(
                "soft_penalty must be in [0, 1], got {}",
                self.soft_penalty
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(format!("epsilon must be positive, got {}", self.epsilon));
        }
        if self.ordinal_scale.is_empty() {
            return Err("ordinal scale must have at least one level".into());
        }
        if self.tie_break_attribute.is_empty() {
            return Err("tie_break_attribute must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_directions() {
        let config = EngineConfig::default();
        assert_eq!(config.direction("price"), Direction::LowerIsBetter);
        assert_eq!(config.direction("novelty"), Direction::HigherIsBetter);
    }

    #[test]
    fn test_direction_override() {
        let config = EngineConfig::default().with_direction("latency", Direction::LowerIsBetter);
        assert_eq!(config.direction("latency"), Direction::LowerIsBetter);
    }

    #[test]
    fn test_validate_bad_penalty() {
        assert!(EngineConfig::default()
            .with_soft_penalty(1.5)
            .validate()
            .is_err());
        assert!(EngineConfig::default()
            .with_soft_penalty(-0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_epsilon() {
        assert!(EngineConfig::default().with_epsilon(0.0).validate().is_err());
        assert!(EngineConfig::default()
            .with_epsilon(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_empty_scale() {
        let config =
            EngineConfig::default().with_ordinal_scale(OrdinalScale::new(Vec::<String>::new()));
        assert!(config.validate().is_err());
    }
}
