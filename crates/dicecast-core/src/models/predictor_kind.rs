use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of heuristic predictors the ensemble can field.
///
/// Rosters, weights and ledger records are keyed by this enum rather
/// than by free-form names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorKind {
    /// Exponentially recency-weighted vote.
    Trend,
    /// Most frequent short subsequence in a trailing window.
    ShortPattern,
    /// Mean reversion against category imbalance.
    MeanDeviation,
    /// Alternation count; a constant-direction flip signal.
    RecentSwitch,
    /// First-order transition estimate.
    Markov,
    /// Streak, break probability, totals drift and staircase detector.
    StreakBreak,
    /// Pattern Memory lookup, longest context first.
    NGram,
    /// Blended n-gram posterior over a 15-round window.
    NGramWindow,
    /// Sum and face distribution of recent dice.
    Dice,
}

impl PredictorKind {
    pub const ALL: [PredictorKind; 9] = [
        PredictorKind::Trend,
        PredictorKind::ShortPattern,
        PredictorKind::MeanDeviation,
        PredictorKind::RecentSwitch,
        PredictorKind::Markov,
        PredictorKind::StreakBreak,
        PredictorKind::NGram,
        PredictorKind::NGramWindow,
        PredictorKind::Dice,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PredictorKind::Trend => "trend",
            PredictorKind::ShortPattern => "short_pattern",
            PredictorKind::MeanDeviation => "mean_deviation",
            PredictorKind::RecentSwitch => "recent_switch",
            PredictorKind::Markov => "markov",
            PredictorKind::StreakBreak => "streak_break",
            PredictorKind::NGram => "ngram",
            PredictorKind::NGramWindow => "ngram_window",
            PredictorKind::Dice => "dice",
        }
    }
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
