//! PredictionEngine: runs the roster, fuses the votes, builds the Forecast.

use chrono::Utc;
use dicecast_core::config::{DicecastConfig, WeightingMode};
use dicecast_core::constants::NO_DATA_RATIONALE;
use dicecast_core::errors::{DicecastErrorCode, HistoryError};
use dicecast_core::models::{Fallback, Forecast, PredictionRecord};
use dicecast_sequence::{PatternMemory, SequenceStore};
use rand::RngCore;
use tracing::debug;

use crate::context::PredictionContext;
use crate::fusion::{self, FusionOutcome};
use crate::predictors::{self, Vote};
use crate::weights::WeightVector;

/// Everything one forecast produced.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub forecast: Forecast,
    /// Per-predictor guesses; `None` for the empty-store answer.
    pub record: Option<PredictionRecord>,
    pub votes: Vec<Vote>,
    pub fusion: Option<FusionOutcome>,
}

/// Stateless forecaster over borrowed state.
pub struct PredictionEngine<'a> {
    config: &'a DicecastConfig,
}

impl<'a> PredictionEngine<'a> {
    pub fn new(config: &'a DicecastConfig) -> Self {
        Self { config }
    }

    /// Forecast the round after the store's latest.
    pub fn forecast(
        &self,
        store: &SequenceStore,
        memory: &PatternMemory,
        weights: &WeightVector,
        rng: &mut dyn RngCore,
    ) -> EngineOutput {
        if store.is_empty() {
            return self.empty_store(rng);
        }

        let ctx = PredictionContext::new(store, memory, self.config);
        let votes: Vec<Vote> = self
            .config
            .fusion
            .roster
            .iter()
            .map(|entry| predictors::evaluate(entry.kind, &ctx, rng))
            .collect();

        let outcome = fusion::fuse(&votes, weights, &ctx, &self.config.fusion);
        let shown = (self.config.weighting.mode == WeightingMode::GradientUpdate).then_some(weights);
        let rationale = fusion::explain(&votes, &outcome, shown);

        let record = PredictionRecord {
            guesses: votes.iter().map(|v| (v.kind, v.guess)).collect(),
            final_call: outcome.category,
        };
        let fallbacks: Vec<Fallback> = votes.iter().filter_map(|v| v.fallback.clone()).collect();
        debug!(
            category = %outcome.category,
            confidence = outcome.confidence,
            fallbacks = fallbacks.len(),
            "forecast fused"
        );

        let forecast = Forecast {
            category: outcome.category,
            confidence: outcome.confidence,
            rationale,
            recent_digest: ctx.window(self.config.store.digest_len).to_vec(),
            basis_round: store.latest().map(|r| r.id),
            fallbacks,
            generated_at: Utc::now(),
        };
        EngineOutput {
            forecast,
            record: Some(record),
            votes,
            fusion: Some(outcome),
        }
    }

    fn empty_store(&self, rng: &mut dyn RngCore) -> EngineOutput {
        debug!(code = HistoryError::EmptyStore.error_code(), "empty store, coin draw");
        EngineOutput {
            forecast: Forecast {
                category: predictors::coin(rng),
                confidence: 0.5,
                rationale: NO_DATA_RATIONALE.to_string(),
                recent_digest: Vec::new(),
                basis_round: None,
                fallbacks: vec![Fallback::EmptyStore],
                generated_at: Utc::now(),
            },
            record: None,
            votes: Vec::new(),
            fusion: None,
        }
    }
}
