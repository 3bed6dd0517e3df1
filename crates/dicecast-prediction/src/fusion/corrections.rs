//! Structural corrections applied to the raw vote scores, in fixed order:
//! momentum, bad-pattern dampening, skew.

use dicecast_core::config::FusionConfig;
use dicecast_core::models::Category;
use dicecast_sequence::stats::{self, CategoryCounts};
use serde::Serialize;

/// Accumulated vote mass per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Scores {
    pub big: f64,
    pub small: f64,
}

impl Scores {
    pub fn add(&mut self, category: Category, weight: f64) {
        match category {
            Category::Big => self.big += weight,
            Category::Small => self.small += weight,
        }
    }

    pub fn scale(&mut self, factor: f64) {
        self.big *= factor;
        self.small *= factor;
    }

    /// Ties go to `Big`.
    pub fn leader(&self) -> Category {
        Category::argmax(self.big, self.small)
    }

    pub fn margin(&self) -> f64 {
        (self.big - self.small).abs()
    }
}

/// A correction that fired during fusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Correction {
    /// The short window leaned one way by more than the margin.
    Momentum { toward: Category, balance: i64 },
    /// Very choppy or very streaky recent play; both scores dampened.
    BadPattern { switches: usize, streak: usize },
    /// The medium window was heavy on one side; nudge the other.
    Skew { toward: Category, heavy_count: usize },
}

impl Correction {
    pub fn apply(&self, scores: &mut Scores, config: &FusionConfig) {
        match *self {
            Correction::Momentum { toward, .. } => scores.add(toward, config.momentum_nudge),
            Correction::BadPattern { .. } => scores.scale(config.dampening),
            Correction::Skew { toward, .. } => scores.add(toward, config.skew_nudge),
        }
    }
}

pub fn momentum(seq: &[Category], config: &FusionConfig) -> Option<Correction> {
    let balance = CategoryCounts::of(stats::tail(seq, config.momentum_window)).balance();
    let toward = if balance > config.momentum_margin {
        Category::Big
    } else if balance < -config.momentum_margin {
        Category::Small
    } else {
        return None;
    };
    Some(Correction::Momentum { toward, balance })
}

pub fn bad_pattern(seq: &[Category], streak_len: usize, config: &FusionConfig) -> Option<Correction> {
    let switches = stats::switches(stats::tail(seq, config.bad_pattern_window));
    (switches >= config.bad_pattern_switches || streak_len >= config.bad_pattern_streak).then_some(
        Correction::BadPattern {
            switches,
            streak: streak_len,
        },
    )
}

pub fn skew(seq: &[Category], config: &FusionConfig) -> Option<Correction> {
    let counts = CategoryCounts::of(stats::tail(seq, config.skew_window));
    if counts.big >= config.skew_count {
        Some(Correction::Skew {
            toward: Category::Small,
            heavy_count: counts.big,
        })
    } else if counts.small >= config.skew_count {
        Some(Correction::Skew {
            toward: Category::Big,
            heavy_count: counts.small,
        })
    } else {
        None
    }
}

/// Evaluate and apply every correction in order.
pub fn apply_all(
    scores: &mut Scores,
    seq: &[Category],
    streak_len: usize,
    config: &FusionConfig,
) -> Vec<Correction> {
    let fired: Vec<Correction> = [
        momentum(seq, config),
        bad_pattern(seq, streak_len, config),
        skew(seq, config),
    ]
    .into_iter()
    .flatten()
    .collect();
    for c in &fired {
        c.apply(scores, config);
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{alternating, seq};

    #[test]
    fn momentum_needs_more_than_margin() {
        let config = FusionConfig::default();
        assert_eq!(momentum(&seq("BBBSS"), &config), None);
        assert_eq!(
            momentum(&seq("BBBBS"), &config),
            Some(Correction::Momentum {
                toward: Category::Big,
                balance: 3
            })
        );
    }

    #[test]
    fn dampening_keeps_direction() {
        let config = FusionConfig::default();
        let mut scores = Scores {
            big: 1.0,
            small: 0.5,
        };
        let fired = apply_all(&mut scores, &alternating(20, Category::Big), 1, &config);
        assert!(fired.iter().any(|c| matches!(c, Correction::BadPattern { switches: 19, .. })));
        assert_eq!(scores.leader(), Category::Big);
        assert!((scores.big - 0.82).abs() < 1e-9);
    }

    #[test]
    fn skew_nudges_minority() {
        let config = FusionConfig::default();
        let fired = skew(&seq("BBBBBBBBBBSSSSS"), &config);
        assert_eq!(
            fired,
            Some(Correction::Skew {
                toward: Category::Small,
                heavy_count: 10
            })
        );
    }
}
