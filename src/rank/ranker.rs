//! Ordering, tie-breaking, and confidence derivation.

use std::cmp::Ordering;

use super::types::{RankCandidate, Ranking, ScoreStats};

/// Ranks candidates: viable options descending by score (stable), then
/// disqualified options in input order.
///
/// The sort runs in two passes. First a strict stable sort on score
/// alone; epsilon plays no part, so the comparison is a total order.
/// Then consecutive candidates whose scores differ by at most `epsilon`
/// are grouped into runs, and each run is stable-sorted descending by
/// raw tie-break value. A candidate without a tie-break value sinks
/// below those that carry one; exact tie-break ties keep the run's
/// existing order, which for equal scores is input order.
///
/// Confidence: 0.0 with no viable options, 1.0 with exactly one, else
/// the gap between the top two viable scores clamped to [0, 1].
pub fn rank_candidates(candidates: &[RankCandidate], epsilon: f64) -> Ranking {
    let mut viable: Vec<&RankCandidate> = candidates.iter().filter(|c| !c.hard_fail).collect();

    viable.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut start = 0;
    while start < viable.len() {
        let mut end = start + 1;
        while end < viable.len() && viable[end - 1].score - viable[end].score <= epsilon {
            end += 1;
        }
        if end - start > 1 {
            viable[start..end].sort_by(|a, b| {
                let ta = a.tie_break.unwrap_or(f64::NEG_INFINITY);
                let tb = b.tie_break.unwrap_or(f64::NEG_INFINITY);
                tb.partial_cmp(&ta).unwrap_or(Ordering::Equal)
            });
        }
        start = end;
    }

    let confidence = match viable.len() {
        0 => 0.0,
        1 => 1.0,
        _ => (viable[0].score - viable[1].score).clamp(0.0, 1.0),
    };

    let viable_scores: Vec<f64> = viable.iter().map(|c| c.score).collect();
    let stats = ScoreStats::compute(&viable_scores, candidates.len());

    let mut order: Vec<usize> = viable.iter().map(|c| c.index).collect();
    order.extend(
        candidates
            .iter()
            .filter(|c| c.hard_fail)
            .map(|c| c.index),
    );

    Ranking {
        order,
        confidence,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(index: usize, score: f64) -> RankCandidate {
        RankCandidate {
            index,
            score,
            hard_fail: false,
            tie_break: None,
        }
    }

    #[test]
    fn test_descending_by_score() {
        let candidates = vec![candidate(0, 0.2), candidate(1, 0.9), candidate(2, 0.5)];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order, vec![1, 2, 0]);
    }

    #[test]
    fn test_hard_fails_appended_in_input_order() {
        let candidates = vec![
            RankCandidate {
                index: 0,
                score: 0.0,
                hard_fail: true,
                tie_break: None,
            },
            candidate(1, 0.4),
            RankCandidate {
                index: 2,
                score: 0.0,
                hard_fail: true,
                tie_break: None,
            },
            candidate(3, 0.8),
        ];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_tie_broken_by_higher_impact() {
        let candidates = vec![
            RankCandidate {
                index: 0,
                score: 0.5,
                hard_fail: false,
                tie_break: Some(40.0),
            },
            RankCandidate {
                index: 1,
                score: 0.5,
                hard_fail: false,
                tie_break: Some(85.0),
            },
        ];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order, vec![1, 0]);
    }

    #[test]
    fn test_tie_without_impact_preserves_input_order() {
        let candidates = vec![candidate(0, 0.5), candidate(1, 0.5), candidate(2, 0.5)];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order, vec![0, 1, 2]);
    }

    #[test]
    fn test_epsilon_tie_uses_tie_break() {
        let candidates = vec![
            RankCandidate {
                index: 0,
                score: 0.5,
                hard_fail: false,
                tie_break: Some(10.0),
            },
            RankCandidate {
                index: 1,
                score: 0.5 + 1e-12,
                hard_fail: false,
                tie_break: Some(90.0),
            },
        ];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order, vec![1, 0]);
    }

    #[test]
    fn test_epsilon_chained_run_sorted_by_tie_break() {
        // Neighboring scores sit within epsilon of each other while the
        // extremes do not; the whole chain is one run and the tie-break
        // decides it end to end.
        let candidates = vec![
            RankCandidate {
                index: 0,
                score: 0.5,
                hard_fail: false,
                tie_break: Some(10.0),
            },
            RankCandidate {
                index: 1,
                score: 0.5 - 0.9e-9,
                hard_fail: false,
                tie_break: Some(20.0),
            },
            RankCandidate {
                index: 2,
                score: 0.5 - 1.8e-9,
                hard_fail: false,
                tie_break: Some(30.0),
            },
        ];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order, vec![2, 1, 0]);
    }

    #[test]
    fn test_missing_tie_break_sinks_within_run() {
        let candidates = vec![
            candidate(0, 0.5),
            RankCandidate {
                index: 1,
                score: 0.5,
                hard_fail: false,
                tie_break: Some(5.0),
            },
            candidate(2, 0.5),
        ];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order, vec![1, 0, 2]);
    }

    #[test]
    fn test_near_tied_scores_never_panic() {
        // Dense score ladder with sub-epsilon steps and adversarial
        // tie-break values; must order without violating sort invariants.
        let candidates: Vec<RankCandidate> = (0..100)
            .map(|i| RankCandidate {
                index: i,
                score: 0.5 - i as f64 * 0.9e-9,
                hard_fail: false,
                tie_break: Some((i % 7) as f64),
            })
            .collect();
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.order.len(), 100);
    }

    #[test]
    fn test_confidence_no_survivors() {
        let candidates = vec![RankCandidate {
            index: 0,
            score: 0.0,
            hard_fail: true,
            tie_break: None,
        }];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.confidence, 0.0);
    }

    #[test]
    fn test_confidence_sole_survivor() {
        let ranking = rank_candidates(&[candidate(0, 0.3)], 1e-9);
        assert_eq!(ranking.confidence, 1.0);
    }

    #[test]
    fn test_confidence_from_gap() {
        let ranking = rank_candidates(&[candidate(0, 0.9), candidate(1, 0.6)], 1e-9);
        assert!((ranking.confidence - 0.3).abs() < 1e-10);

        let ranking = rank_candidates(&[candidate(0, 0.9), candidate(1, 0.89)], 1e-9);
        assert!(ranking.confidence < 0.05);
    }

    #[test]
    fn test_stats_cover_viable_only() {
        let candidates = vec![
            candidate(0, 0.8),
            RankCandidate {
                index: 1,
                score: 0.0,
                hard_fail: true,
                tie_break: None,
            },
            candidate(2, 0.4),
        ];
        let ranking = rank_candidates(&candidates, 1e-9);
        assert_eq!(ranking.stats.viable, 2);
        assert_eq!(ranking.stats.total, 3);
        assert!((ranking.stats.mean - 0.6).abs() < 1e-10);
    }
}
