//! Core task and option types.

use std::collections::BTreeMap;
use std::fmt;

/// Attribute name carrying an option's feature tags.
pub const ATTR_FEATURES: &str = "features";

/// Attribute name carrying an option's price.
pub const ATTR_PRICE: &str = "price";

/// Attribute name carrying an option's implementation complexity level.
pub const ATTR_COMPLEXITY: &str = "implementation_complexity";

/// Attribute name carrying an option's quality rating.
pub const ATTR_QUALITY: &str = "quality";

/// Attribute name carrying an option's availability status.
pub const ATTR_AVAILABILITY: &str = "availability";

/// A raw attribute value on an option.
///
/// The three variants cover everything the upstream pipeline supplies:
/// numbers (scores, prices), text (categorical levels), and tag lists
/// (feature sets).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AttributeValue {
    /// A numeric value.
    Number(f64),
    /// A categorical / free-text value.
    Text(String),
    /// A list of string tags (e.g., a feature set).
    Tags(Vec<String>),
}

impl AttributeValue {
    /// Returns the numeric value, if this is a [`AttributeValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text value, if this is a [`AttributeValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the tag list, if this is a [`AttributeValue::Tags`].
    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Tags(t) => Some(t),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Number(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Number(v as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(tags: Vec<String>) -> Self {
        AttributeValue::Tags(tags)
    }
}

impl From<&[&str]> for AttributeValue {
    fn from(tags: &[&str]) -> Self {
        AttributeValue::Tags(tags.iter().map(|s| s.to_string()).collect())
    }
}

/// One candidate option: a unique name plus an open attribute map.
///
/// Immutable input to the engine. `BTreeMap` keeps attribute iteration
/// deterministic across runs.
///
/// # Examples
///
/// ```
/// use rankwise::task::OptionRecord;
///
/// let opt = OptionRecord::new("A")
///     .with_attribute("novelty", 0.8)
///     .with_attribute("price", 100.0)
///     .with_attribute("features", ["core", "innovative"].as_slice());
/// assert_eq!(opt.number("price"), Some(100.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionRecord {
    /// Option identifier, unique within a task.
    pub name: String,

    /// Arbitrary additional attributes, referenced by criteria keys and
    /// preference constraints.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl OptionRecord {
    /// Creates an option with the given name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds an attribute (builder style).
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Looks up a numeric attribute by name.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(AttributeValue::as_number)
    }

    /// Looks up a text attribute by name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(AttributeValue::as_text)
    }

    /// Looks up a tag-list attribute by name.
    pub fn tags(&self, name: &str) -> Option<&[String]> {
        self.attribute(name).and_then(AttributeValue::as_tags)
    }
}

/// Structured user constraints.
///
/// Every field is optional; an absent constraint is never a violation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Preferences {
    /// Features every option must carry (subset relation against the
    /// option's `features` tags). Empty = unconstrained.
    pub required_features: Vec<String>,

    /// Inclusive upper bound on the option's `price` attribute.
    pub max_price: Option<f64>,

    /// Inclusive lower bound on the option's `quality` attribute.
    pub min_quality: Option<f64>,

    /// Target complexity level, matched by ordinal distance on the
    /// configured scale.
    #[cfg_attr(feature = "serde", serde(rename = "implementation_complexity"))]
    pub complexity: Option<String>,

    /// Preferred availability status; a differing or absent status is a
    /// soft failure.
    #[cfg_attr(feature = "serde", serde(rename = "preferred_availability"))]
    pub availability: Option<String>,
}

impl Preferences {
    /// Creates unconstrained preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required feature set (builder style).
    pub fn with_required_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the inclusive price ceiling.
    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Sets the inclusive quality floor.
    pub fn with_min_quality(mut self, min_quality: f64) -> Self {
        self.min_quality = Some(min_quality);
        self
    }

    /// Sets the target complexity level.
    pub fn with_complexity(mut self, level: impl Into<String>) -> Self {
        self.complexity = Some(level.into());
        self
    }

    /// Sets the preferred availability status.
    pub fn with_availability(mut self, status: impl Into<String>) -> Self {
        self.availability = Some(status.into());
        self
    }

    /// True when no constraint is stated.
    pub fn is_empty(&self) -> bool {
        self.required_features.is_empty()
            && self.max_price.is_none()
            && self.min_quality.is_none()
            && self.complexity.is_none()
            && self.availability.is_none()
    }
}

/// Task discriminator used by the orchestrator to route payloads between
/// sibling capabilities. This engine only evaluates [`TaskKind::Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TaskKind {
    /// Rank options against preferences and weighted criteria.
    Decision,
    /// Condense text (handled by a sibling agent).
    Summarization,
    /// Fetch source material (handled by a sibling agent).
    Retrieval,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskKind::Decision => "decision",
            TaskKind::Summarization => "summarization",
            TaskKind::Retrieval => "retrieval",
        };
        f.write_str(s)
    }
}

/// The full input to one engine invocation.
///
/// # Examples
///
/// ```
/// use rankwise::task::{DecisionTask, OptionRecord, Preferences};
///
/// let task = DecisionTask::decision(vec![
///     OptionRecord::new("A").with_attribute("novelty", 0.8),
///     OptionRecord::new("B").with_attribute("novelty", 0.3),
/// ])
/// .with_preferences(Preferences::new().with_max_price(150.0))
/// .with_criterion("novelty", 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionTask {
    /// Task discriminator; must be [`TaskKind::Decision`].
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TaskKind,

    /// Candidate options in caller-supplied order. Order is significant
    /// only for tie-breaking, never for scoring.
    #[cfg_attr(feature = "serde", serde(rename = "data"))]
    pub options: Vec<OptionRecord>,

    /// User constraints. Absent constraints never penalize.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "user_preferences", default)
    )]
    pub preferences: Preferences,

    /// Criterion name → non-negative weight. Must be non-empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub criteria: BTreeMap<String, f64>,
}

impl DecisionTask {
    /// Creates a decision task with no preferences and empty criteria.
    pub fn decision(options: Vec<OptionRecord>) -> Self {
        Self {
            kind: TaskKind::Decision,
            options,
            preferences: Preferences::default(),
            criteria: BTreeMap::new(),
        }
    }

    /// Sets the user preferences (builder style).
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Adds one weighted criterion.
    pub fn with_criterion(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.criteria.insert(name.into(), weight);
        self
    }

    /// Replaces the whole criteria mapping.
    pub fn with_criteria(mut self, criteria: BTreeMap<String, f64>) -> Self {
        self.criteria = criteria;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_accessors() {
        let opt = OptionRecord::new("A")
            .with_attribute("price", 100.0)
            .with_attribute("implementation_complexity", "medium")
            .with_attribute("features", ["core", "innovative"].as_slice());

        assert_eq!(opt.number("price"), Some(100.0));
        assert_eq!(opt.text("implementation_complexity"), Some("medium"));
        assert_eq!(
            opt.tags("features"),
            Some(["core".to_string(), "innovative".to_string()].as_slice())
        );
        assert_eq!(opt.number("missing"), None);
        // Wrong-variant access returns None, not a panic
        assert_eq!(opt.number("implementation_complexity"), None);
    }

    #[test]
    fn test_preferences_is_empty() {
        assert!(Preferences::new().is_empty());
        assert!(!Preferences::new().with_max_price(10.0).is_empty());
        assert!(!Preferences::new().with_min_quality(0.5).is_empty());
        assert!(!Preferences::new().with_availability("in_stock").is_empty());
        assert!(!Preferences::new().with_required_features(["core"]).is_empty());
    }

    #[test]
    fn test_task_builder() {
        let task = DecisionTask::decision(vec![OptionRecord::new("A")])
            .with_criterion("novelty", 0.4)
            .with_criterion("research_impact", 0.6);

        assert_eq!(task.kind, TaskKind::Decision);
        assert_eq!(task.criteria.len(), 2);
        assert_eq!(task.criteria["novelty"], 0.4);
    }

    #[test]
    fn test_task_kind_display() {
        assert_eq!(TaskKind::Decision.to_string(), "decision");
        assert_eq!(TaskKind::Retrieval.to_string(), "retrieval");
    }
}
