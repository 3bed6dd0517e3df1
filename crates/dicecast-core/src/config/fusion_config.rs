use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PredictorKind;

/// One voter in the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub kind: PredictorKind,
    pub base_weight: f64,
    /// Use the predictor's own strength signal as its vote weight when present.
    #[serde(default)]
    pub signal_weighted: bool,
}

impl RosterEntry {
    pub const fn new(kind: PredictorKind, base_weight: f64) -> Self {
        Self {
            kind,
            base_weight,
            signal_weighted: false,
        }
    }

    pub const fn signal_weighted(kind: PredictorKind, base_weight: f64) -> Self {
        Self {
            kind,
            base_weight,
            signal_weighted: true,
        }
    }
}

/// Roster of the classic performance-multiplier ensemble.
pub fn classic_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(PredictorKind::Trend, 0.16),
        RosterEntry::new(PredictorKind::ShortPattern, 0.16),
        RosterEntry::new(PredictorKind::MeanDeviation, 0.18),
        RosterEntry::new(PredictorKind::RecentSwitch, 0.14),
        RosterEntry::new(PredictorKind::Markov, 0.10),
        RosterEntry::new(PredictorKind::StreakBreak, 0.22),
        RosterEntry::signal_weighted(PredictorKind::NGram, 0.18),
        RosterEntry::new(PredictorKind::NGramWindow, 0.24),
    ]
}

/// Roster of the gradient-updated ensemble, which fields the dice predictor.
pub fn adaptive_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(PredictorKind::Trend, 0.15),
        RosterEntry::new(PredictorKind::ShortPattern, 0.10),
        RosterEntry::new(PredictorKind::MeanDeviation, 0.10),
        RosterEntry::new(PredictorKind::RecentSwitch, 0.10),
        RosterEntry::new(PredictorKind::Markov, 0.15),
        RosterEntry::new(PredictorKind::NGram, 0.20),
        RosterEntry::new(PredictorKind::Dice, 0.20),
    ]
}

/// Fusion Engine configuration: roster, structural corrections, confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    pub roster: Vec<RosterEntry>,

    pub momentum_window: usize,
    /// `big - small` beyond this margin earns the momentum nudge.
    pub momentum_margin: i64,
    pub momentum_nudge: f64,

    pub bad_pattern_window: usize,
    pub bad_pattern_switches: usize,
    pub bad_pattern_streak: usize,
    /// Multiplier (< 1) applied to both scores under a bad pattern.
    pub dampening: f64,

    pub skew_window: usize,
    /// A category at or above this count in the skew window is "heavy".
    pub skew_count: usize,
    pub skew_nudge: f64,

    pub confidence_base: f64,
    pub margin_cap: f64,
    /// Share of the pattern confidence signal in the blended confidence.
    pub signal_blend: f64,
    /// Signal used when no predictor supplies one.
    pub signal_fallback: f64,
    /// Reversal bonus is `reversal_scale * break_probability`.
    pub reversal_scale: f64,
    pub confidence_min: f64,
    pub confidence_max: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            roster: classic_roster(),
            momentum_window: defaults::DEFAULT_MOMENTUM_WINDOW,
            momentum_margin: defaults::DEFAULT_MOMENTUM_MARGIN,
            momentum_nudge: defaults::DEFAULT_MOMENTUM_NUDGE,
            bad_pattern_window: defaults::DEFAULT_BAD_PATTERN_WINDOW,
            bad_pattern_switches: defaults::DEFAULT_BAD_PATTERN_SWITCHES,
            bad_pattern_streak: defaults::DEFAULT_BAD_PATTERN_STREAK,
            dampening: defaults::DEFAULT_BAD_PATTERN_DAMPENING,
            skew_window: defaults::DEFAULT_SKEW_WINDOW,
            skew_count: defaults::DEFAULT_SKEW_COUNT,
            skew_nudge: defaults::DEFAULT_SKEW_NUDGE,
            confidence_base: defaults::DEFAULT_CONFIDENCE_BASE,
            margin_cap: defaults::DEFAULT_MARGIN_CAP,
            signal_blend: defaults::DEFAULT_SIGNAL_BLEND,
            signal_fallback: defaults::DEFAULT_SIGNAL_FALLBACK,
            reversal_scale: defaults::DEFAULT_REVERSAL_SCALE,
            confidence_min: defaults::DEFAULT_CONFIDENCE_MIN,
            confidence_max: defaults::DEFAULT_CONFIDENCE_MAX,
        }
    }
}
