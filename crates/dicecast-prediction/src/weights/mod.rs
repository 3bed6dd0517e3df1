//! Adaptive Weight Tracker.
//!
//! Two modes, chosen by `WeightingConfig::mode`:
//! - `PerformanceMultiplier`: roster base weight × a hit-rate multiplier,
//!   recomputed from the ledger on every request.
//! - `GradientUpdate`: a persistent vector nudged toward each predictor's
//!   accuracy after each window of `update_interval` (by default
//!   `lookback`) newly settled entries, kept in its
//!   band and summing to 1.
//!
//! Both read only settled ledger entries, so a guess is never scored
//! against the round it was made from.

pub mod gradient;
pub mod performance;

use std::collections::BTreeMap;
use std::fmt;

use dicecast_core::config::{DicecastConfig, RosterEntry, WeightingConfig, WeightingMode};
use dicecast_core::models::PredictorKind;
use dicecast_observability::weights_span;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::PredictionLedger;
use crate::r2;

/// Vote weight per predictor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightVector(BTreeMap<PredictorKind, f64>);

impl WeightVector {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (PredictorKind, f64)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Base weights of a roster.
    pub fn from_roster(roster: &[RosterEntry]) -> Self {
        Self::from_pairs(roster.iter().map(|e| (e.kind, e.base_weight)))
    }

    /// `0.0` for a predictor outside the vector.
    pub fn get(&self, kind: PredictorKind) -> f64 {
        self.0.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, kind: PredictorKind, weight: f64) {
        self.0.insert(kind, weight);
    }

    pub fn kinds(&self) -> impl Iterator<Item = PredictorKind> + '_ {
        self.0.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PredictorKind, f64)> + '_ {
        self.0.iter().map(|(&k, &w)| (k, w))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (kind, w) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{kind}={:.2}", r2(w))?;
        }
        Ok(())
    }
}

/// Turns ledger history into per-predictor vote weights.
#[derive(Debug, Clone, Serialize)]
pub struct WeightTracker {
    config: WeightingConfig,
    roster: Vec<RosterEntry>,
    /// Gradient-mode state; stays at the normalized base weights otherwise.
    vector: WeightVector,
    /// `PredictionLedger::settled_total` at the last gradient update.
    last_update_at: u64,
    updates: u64,
}

impl WeightTracker {
    pub fn new(config: &DicecastConfig) -> Self {
        let weighting = config.weighting.clone();
        let mut vector = WeightVector::from_roster(&config.fusion.roster);
        if weighting.mode == WeightingMode::GradientUpdate {
            gradient::bounded_normalize(&mut vector, weighting.weight_min, weighting.weight_max);
        }
        Self {
            config: weighting,
            roster: config.fusion.roster.clone(),
            vector,
            last_update_at: 0,
            updates: 0,
        }
    }

    pub fn mode(&self) -> WeightingMode {
        self.config.mode
    }

    /// React to newly settled entries. Returns `true` when the gradient
    /// vector moved; always `false` in performance-multiplier mode.
    pub fn observe(&mut self, ledger: &PredictionLedger) -> bool {
        if self.config.mode != WeightingMode::GradientUpdate {
            return false;
        }
        let settled = ledger.settled_count();
        let fresh = ledger.settled_total().saturating_sub(self.last_update_at);
        if settled < self.config.gradient_min_entries || fresh < self.config.update_interval as u64 {
            return false;
        }

        let _span = weights_span!(settled, self.updates + 1).entered();
        let window = ledger.recent_settled(self.config.lookback);
        gradient::step(&mut self.vector, &window, &self.config);
        self.last_update_at = ledger.settled_total();
        self.updates += 1;
        debug!(weights = %self.vector, sum = self.vector.sum(), "gradient weights updated");
        true
    }

    /// Current vote weight of every roster predictor.
    pub fn voting_weights(&self, ledger: &PredictionLedger) -> WeightVector {
        match self.config.mode {
            WeightingMode::GradientUpdate => self.vector.clone(),
            WeightingMode::PerformanceMultiplier => {
                let settled = ledger.recent_settled(self.config.lookback);
                WeightVector::from_pairs(self.roster.iter().map(|e| {
                    (
                        e.kind,
                        e.base_weight * performance::multiplier(e.kind, &settled, &self.config),
                    )
                }))
            }
        }
    }

    /// Hit-rate multiplier of one predictor over the lookback window.
    pub fn multiplier(&self, kind: PredictorKind, ledger: &PredictionLedger) -> f64 {
        let settled = ledger.recent_settled(self.config.lookback);
        performance::multiplier(kind, &settled, &self.config)
    }

    /// The persistent gradient-mode vector.
    pub fn vector(&self) -> &WeightVector {
        &self.vector
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }
}
