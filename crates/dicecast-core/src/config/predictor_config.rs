use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-predictor tuning, one section per heuristic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub trend: TrendConfig,
    pub short_pattern: ShortPatternConfig,
    pub mean_deviation: MeanDeviationConfig,
    pub recent_switch: RecentSwitchConfig,
    pub ngram: NGramConfig,
    pub ngram_window: NGramWindowConfig,
    pub streak_break: StreakBreakConfig,
    pub dice: DiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    pub window: usize,
    /// Weight of position `i` is `base^i`; must exceed 1.
    pub base: f64,
    /// Weighted imbalance (fraction of total weight) needed to follow the trend.
    pub threshold: f64,
    pub min_history: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_TREND_WINDOW,
            base: defaults::DEFAULT_TREND_BASE,
            threshold: defaults::DEFAULT_TREND_THRESHOLD,
            min_history: defaults::DEFAULT_TREND_MIN_HISTORY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortPatternConfig {
    pub window: usize,
    pub pattern_len: usize,
    pub min_occurrences: usize,
    pub min_history: usize,
}

impl Default for ShortPatternConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_SHORT_PATTERN_WINDOW,
            pattern_len: defaults::DEFAULT_SHORT_PATTERN_LEN,
            min_occurrences: defaults::DEFAULT_SHORT_PATTERN_MIN_OCCURRENCES,
            min_history: defaults::DEFAULT_SHORT_PATTERN_MIN_HISTORY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeanDeviationConfig {
    pub window: usize,
    pub min_history: usize,
    /// `|big - small| / n` below this counts as balanced.
    pub balance_threshold: f64,
}

impl Default for MeanDeviationConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_MEAN_DEVIATION_WINDOW,
            min_history: defaults::DEFAULT_MEAN_DEVIATION_MIN_HISTORY,
            balance_threshold: defaults::DEFAULT_MEAN_DEVIATION_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentSwitchConfig {
    pub window: usize,
    pub min_history: usize,
    pub switch_threshold: usize,
}

impl Default for RecentSwitchConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_SWITCH_WINDOW,
            min_history: defaults::DEFAULT_SWITCH_MIN_HISTORY,
            switch_threshold: defaults::DEFAULT_SWITCH_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NGramConfig {
    pub min_history: usize,
    /// Vote strength is `base_strength + strength_scale * lopsidedness`.
    pub base_strength: f64,
    pub strength_scale: f64,
}

impl Default for NGramConfig {
    fn default() -> Self {
        Self {
            min_history: defaults::DEFAULT_NGRAM_MIN_HISTORY,
            base_strength: defaults::DEFAULT_NGRAM_BASE_STRENGTH,
            strength_scale: defaults::DEFAULT_NGRAM_STRENGTH_SCALE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NGramWindowConfig {
    pub window: usize,
    pub min_history: usize,
    /// Weight of each order's posterior when blended into the running estimate.
    pub blend: f64,
    pub long_run: usize,
    pub run_push: f64,
    pub alternation_switches: usize,
    pub alternation_push: f64,
    pub entropy_threshold: f64,
    pub confidence_boost: f64,
    pub confidence_min: f64,
    pub confidence_max: f64,
}

impl Default for NGramWindowConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_NGRAM_WINDOW_LEN,
            min_history: defaults::DEFAULT_NGRAM_WINDOW_MIN_HISTORY,
            blend: defaults::DEFAULT_NGRAM_WINDOW_BLEND,
            long_run: defaults::DEFAULT_NGRAM_WINDOW_LONG_RUN,
            run_push: defaults::DEFAULT_NGRAM_WINDOW_RUN_PUSH,
            alternation_switches: defaults::DEFAULT_NGRAM_WINDOW_ALTERNATION_SWITCHES,
            alternation_push: defaults::DEFAULT_NGRAM_WINDOW_ALTERNATION_PUSH,
            entropy_threshold: defaults::DEFAULT_ENTROPY_THRESHOLD,
            confidence_boost: defaults::DEFAULT_NGRAM_WINDOW_CONFIDENCE_BOOST,
            confidence_min: defaults::DEFAULT_NGRAM_WINDOW_CONFIDENCE_MIN,
            confidence_max: defaults::DEFAULT_NGRAM_WINDOW_CONFIDENCE_MAX,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakBreakConfig {
    pub min_history: usize,
    pub totals_window: usize,
    pub stair_window: usize,
    pub variance_threshold: f64,
    /// Break score above this predicts a reversal.
    pub decision_threshold: f64,
}

impl Default for StreakBreakConfig {
    fn default() -> Self {
        Self {
            min_history: defaults::DEFAULT_STREAK_BREAK_MIN_HISTORY,
            totals_window: defaults::DEFAULT_STREAK_BREAK_TOTALS_WINDOW,
            stair_window: defaults::DEFAULT_STREAK_BREAK_STAIR_WINDOW,
            variance_threshold: defaults::DEFAULT_STREAK_BREAK_VARIANCE_THRESHOLD,
            decision_threshold: defaults::DEFAULT_STREAK_BREAK_DECISION_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    pub window: usize,
    /// Rounds with dice values needed inside the window.
    pub min_history: usize,
    pub high_avg: f64,
    pub low_avg: f64,
    pub sum_nudge: f64,
    pub high_face_ratio: f64,
    pub low_face_ratio: f64,
    pub face_nudge: f64,
    /// Occurrences of one face pair in the window that trigger `pair_boost`.
    pub pair_repeat: usize,
    pub pair_boost: f64,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_DICE_WINDOW,
            min_history: defaults::DEFAULT_DICE_MIN_HISTORY,
            high_avg: defaults::DEFAULT_DICE_HIGH_AVG,
            low_avg: defaults::DEFAULT_DICE_LOW_AVG,
            sum_nudge: defaults::DEFAULT_DICE_SUM_NUDGE,
            high_face_ratio: defaults::DEFAULT_DICE_HIGH_FACE_RATIO,
            low_face_ratio: defaults::DEFAULT_DICE_LOW_FACE_RATIO,
            face_nudge: defaults::DEFAULT_DICE_FACE_NUDGE,
            pair_repeat: defaults::DEFAULT_DICE_PAIR_REPEAT,
            pair_boost: defaults::DEFAULT_DICE_PAIR_BOOST,
        }
    }
}
