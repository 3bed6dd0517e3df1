use serde::{Deserialize, Serialize};

use super::defaults;

/// How the Adaptive Weight Tracker turns ledger history into vote weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightingMode {
    /// Base weight × hit-rate multiplier, recomputed per request.
    #[default]
    PerformanceMultiplier,
    /// Persistent weight vector nudged toward observed accuracy.
    GradientUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    pub mode: WeightingMode,
    /// Settled ledger entries considered per evaluation.
    pub lookback: usize,

    pub multiplier_min_entries: usize,
    pub multiplier_min: f64,
    pub multiplier_max: f64,

    pub learning_rate: f64,
    pub weight_min: f64,
    pub weight_max: f64,
    pub gradient_min_entries: usize,
    /// New settled entries required between gradient updates.
    pub update_interval: usize,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            mode: WeightingMode::default(),
            lookback: defaults::DEFAULT_WEIGHT_LOOKBACK,
            multiplier_min_entries: defaults::DEFAULT_MULTIPLIER_MIN_ENTRIES,
            multiplier_min: defaults::DEFAULT_MULTIPLIER_MIN,
            multiplier_max: defaults::DEFAULT_MULTIPLIER_MAX,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            weight_min: defaults::DEFAULT_WEIGHT_MIN,
            weight_max: defaults::DEFAULT_WEIGHT_MAX,
            gradient_min_entries: defaults::DEFAULT_GRADIENT_MIN_ENTRIES,
            update_interval: defaults::DEFAULT_GRADIENT_UPDATE_INTERVAL,
        }
    }
}
