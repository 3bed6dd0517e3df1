use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern Memory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Context lengths tracked by the n-gram table.
    pub orders: Vec<usize>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            orders: defaults::DEFAULT_PATTERN_ORDERS.to_vec(),
        }
    }
}

/// One step of the break-probability base function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreakStep {
    /// Streaks at least this long use `base`.
    pub min_len: usize,
    pub base: f64,
}

/// Streak/Break Analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    /// Trailing window for switch-rate and entropy terms.
    pub window: usize,
    /// Step function over streak length. Order does not matter.
    pub steps: Vec<StreakStep>,
    /// Base used when no step applies.
    pub base_floor: f64,
    /// Each switch in the window adds `1 / switch_divisor`.
    pub switch_divisor: f64,
    /// Window entropy below this adds `skew_bonus`.
    pub entropy_threshold: f64,
    pub skew_bonus: f64,
    pub min: f64,
    pub max: f64,
}

impl StreakConfig {
    /// Base value for a streak length: the highest step reached, else the floor.
    pub fn base_for(&self, streak_len: usize) -> f64 {
        self.steps
            .iter()
            .filter(|s| streak_len >= s.min_len)
            .map(|s| s.base)
            .fold(self.base_floor, f64::max)
    }
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_BREAK_WINDOW,
            steps: defaults::DEFAULT_BREAK_STEPS
                .iter()
                .map(|&(min_len, base)| StreakStep { min_len, base })
                .collect(),
            base_floor: defaults::DEFAULT_BREAK_BASE_FLOOR,
            switch_divisor: defaults::DEFAULT_BREAK_SWITCH_DIVISOR,
            entropy_threshold: defaults::DEFAULT_ENTROPY_THRESHOLD,
            skew_bonus: defaults::DEFAULT_BREAK_SKEW_BONUS,
            min: defaults::DEFAULT_BREAK_MIN,
            max: defaults::DEFAULT_BREAK_MAX,
        }
    }
}

/// Markov Estimator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkovConfig {
    /// Below this many rounds the estimator returns the uniform prior.
    pub min_history: usize,
}

impl Default for MarkovConfig {
    fn default() -> Self {
        Self {
            min_history: defaults::DEFAULT_MARKOV_MIN_HISTORY,
        }
    }
}
