pub mod analysis_config;
pub mod defaults;
pub mod fusion_config;
pub mod observability_config;
pub mod predictor_config;
pub mod store_config;
pub mod weighting_config;

pub use analysis_config::{MarkovConfig, PatternConfig, StreakConfig, StreakStep};
pub use fusion_config::{adaptive_roster, classic_roster, FusionConfig, RosterEntry};
pub use observability_config::ObservabilityConfig;
pub use predictor_config::{
    DiceConfig, MeanDeviationConfig, NGramConfig, NGramWindowConfig, PredictorConfig,
    RecentSwitchConfig, ShortPatternConfig, StreakBreakConfig, TrendConfig,
};
pub use store_config::StoreConfig;
pub use weighting_config::{WeightingConfig, WeightingMode};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DicecastConfig {
    /// Seed for the fallback coin draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub store: StoreConfig,
    pub pattern: PatternConfig,
    pub streak: StreakConfig,
    pub markov: MarkovConfig,
    pub predictors: PredictorConfig,
    pub fusion: FusionConfig,
    pub weighting: WeightingConfig,
    pub observability: ObservabilityConfig,
}

impl DicecastConfig {
    /// Parse from a TOML string. Missing fields use defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// The performance-multiplier ensemble with the eight classic voters.
    pub fn classic() -> Self {
        Self::default()
    }

    /// The gradient-updated ensemble including the dice predictor.
    pub fn adaptive() -> Self {
        let mut config = Self::default();
        config.fusion.roster = adaptive_roster();
        config.weighting.mode = WeightingMode::GradientUpdate;
        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.max_history == 0 {
            return Err(ConfigError::invalid("store.max_history", "must be > 0"));
        }
        if self.store.max_predictions_history == 0 {
            return Err(ConfigError::invalid(
                "store.max_predictions_history",
                "must be > 0",
            ));
        }
        if self.pattern.orders.iter().any(|&n| n == 0) {
            return Err(ConfigError::invalid("pattern.orders", "orders must be > 0"));
        }
        if self.store.digest_len == 0 {
            return Err(ConfigError::invalid("store.digest_len", "must be > 0"));
        }
        self.validate_windows()?;
        check_band("streak", self.streak.min, self.streak.max)?;
        if self.streak.switch_divisor <= 0.0 {
            return Err(ConfigError::invalid("streak.switch_divisor", "must be > 0"));
        }
        if self.predictors.trend.base <= 1.0 {
            return Err(ConfigError::invalid("predictors.trend.base", "must be > 1"));
        }
        if self.predictors.short_pattern.pattern_len < 2 {
            return Err(ConfigError::invalid(
                "predictors.short_pattern.pattern_len",
                "must be >= 2",
            ));
        }
        check_band(
            "predictors.ngram_window.confidence",
            self.predictors.ngram_window.confidence_min,
            self.predictors.ngram_window.confidence_max,
        )?;
        self.validate_fusion()?;
        self.validate_weighting()
    }

    fn validate_windows(&self) -> Result<(), ConfigError> {
        let p = &self.predictors;
        let f = &self.fusion;
        let windows = [
            ("streak.window", self.streak.window),
            ("predictors.trend.window", p.trend.window),
            ("predictors.short_pattern.window", p.short_pattern.window),
            ("predictors.mean_deviation.window", p.mean_deviation.window),
            ("predictors.recent_switch.window", p.recent_switch.window),
            ("predictors.ngram_window.window", p.ngram_window.window),
            ("predictors.streak_break.totals_window", p.streak_break.totals_window),
            ("predictors.streak_break.stair_window", p.streak_break.stair_window),
            ("predictors.dice.window", p.dice.window),
            ("fusion.momentum_window", f.momentum_window),
            ("fusion.bad_pattern_window", f.bad_pattern_window),
            ("fusion.skew_window", f.skew_window),
        ];
        match windows.iter().find(|(_, len)| *len == 0) {
            Some((field, _)) => Err(ConfigError::invalid(field, "window must be > 0")),
            None => Ok(()),
        }
    }

    fn validate_fusion(&self) -> Result<(), ConfigError> {
        let fusion = &self.fusion;
        if fusion.roster.is_empty() {
            return Err(ConfigError::invalid("fusion.roster", "roster is empty"));
        }
        let mut seen = HashSet::new();
        for entry in &fusion.roster {
            if !seen.insert(entry.kind) {
                return Err(ConfigError::invalid(
                    "fusion.roster",
                    format!("duplicate predictor {}", entry.kind),
                ));
            }
            if entry.base_weight < 0.0 || !entry.base_weight.is_finite() {
                return Err(ConfigError::invalid(
                    "fusion.roster",
                    format!("{} has invalid base weight {}", entry.kind, entry.base_weight),
                ));
            }
        }
        if !(0.0..=1.0).contains(&fusion.dampening) {
            return Err(ConfigError::invalid("fusion.dampening", "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&fusion.signal_blend) {
            return Err(ConfigError::invalid("fusion.signal_blend", "must be in [0, 1]"));
        }
        check_band("fusion.confidence", fusion.confidence_min, fusion.confidence_max)?;
        if fusion.confidence_min < 0.0 || fusion.confidence_max > 1.0 {
            return Err(ConfigError::invalid(
                "fusion.confidence",
                "band must lie within [0, 1]",
            ));
        }
        Ok(())
    }

    fn validate_weighting(&self) -> Result<(), ConfigError> {
        let w = &self.weighting;
        if w.lookback == 0 {
            return Err(ConfigError::invalid("weighting.lookback", "must be > 0"));
        }
        check_band("weighting.multiplier", w.multiplier_min, w.multiplier_max)?;
        check_band("weighting.weight", w.weight_min, w.weight_max)?;
        if w.weight_min < 0.0 {
            return Err(ConfigError::invalid("weighting.weight_min", "must be >= 0"));
        }
        if w.mode == WeightingMode::GradientUpdate {
            let n = self.fusion.roster.len() as f64;
            if n * w.weight_min > 1.0 || n * w.weight_max < 1.0 {
                return Err(ConfigError::invalid(
                    "weighting.weight",
                    format!(
                        "band [{}, {}] cannot sum to 1 across {} predictors",
                        w.weight_min, w.weight_max, n
                    ),
                ));
            }
            if let Some(entry) = self.fusion.roster.iter().find(|e| e.base_weight == 0.0) {
                return Err(ConfigError::invalid(
                    "fusion.roster",
                    format!("{} needs a positive base weight in gradient mode", entry.kind),
                ));
            }
            if w.update_interval == 0 {
                return Err(ConfigError::invalid("weighting.update_interval", "must be > 0"));
            }
        }
        Ok(())
    }
}

fn check_band(field: &str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("min {min} exceeds max {max}")))
    }
}
