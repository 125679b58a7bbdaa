//! Ranking inputs and outputs.

/// One option as the ranker sees it: score, viability, and tie-break
/// material. `index` is the option's position in the caller's input.
#[derive(Debug, Clone, PartialEq)]
pub struct RankCandidate {
    /// Position in the input option list.
    pub index: usize,
    /// Composite score (0 for disqualified options).
    pub score: f64,
    /// True when the constraint filter disqualified this option.
    pub hard_fail: bool,
    /// Raw value of the tie-break attribute, when the option has one.
    pub tie_break: Option<f64>,
}

/// Output of the ranker: input indices in final rank order plus the
/// derived confidence and score statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Input indices, best first; disqualified options at the end.
    pub order: Vec<usize>,
    /// Confidence in the overall ranking, in [0, 1].
    pub confidence: f64,
    /// Summary statistics over viable composite scores.
    pub stats: ScoreStats,
}

/// Summary statistics over the viable (non-disqualified) composite
/// scores, reported alongside the ranking.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreStats {
    /// Mean of viable scores (0 when none survive).
    pub mean: f64,
    /// Population standard deviation of viable scores.
    pub std_dev: f64,
    /// Median of viable scores.
    pub median: f64,
    /// Minimum viable score.
    pub min: f64,
    /// Maximum viable score.
    pub max: f64,
    /// Number of options that survived filtering.
    pub viable: usize,
    /// Total number of input options.
    pub total: usize,
}

impl ScoreStats {
    /// Computes statistics over the given viable scores.
    pub fn compute(viable_scores: &[f64], total: usize) -> Self {
        if viable_scores.is_empty() {
            return Self {
                total,
                ..Self::default()
            };
        }

        let n = viable_scores.len() as f64;
        let mean = viable_scores.iter().sum::<f64>() / n;
        let variance = viable_scores
            .iter()
            .map(|s| (s - mean).powi(2))
            .sum::<f64>()
            / n;

        let mut sorted = viable_scores.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Self {
            mean,
            std_dev: variance.sqrt(),
            median,
            min: sorted[0],
            max: *sorted.last().unwrap_or(&0.0),
            viable: viable_scores.len(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let stats = ScoreStats::compute(&[0.2, 0.8, 0.5], 5);
        assert!((stats.mean - 0.5).abs() < 1e-10);
        assert!((stats.median - 0.5).abs() < 1e-10);
        assert!((stats.min - 0.2).abs() < 1e-10);
        assert!((stats.max - 0.8).abs() < 1e-10);
        assert_eq!(stats.viable, 3);
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn test_stats_even_count_median() {
        let stats = ScoreStats::compute(&[0.0, 1.0, 0.4, 0.6], 4);
        assert!((stats.median - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        let stats = ScoreStats::compute(&[], 3);
        assert_eq!(stats.viable, 0);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.mean, 0.0);
    }

    #[test]
    fn test_stats_std_dev() {
        let stats = ScoreStats::compute(&[0.0, 1.0], 2);
        assert!((stats.std_dev - 0.5).abs() < 1e-10);
    }
}
