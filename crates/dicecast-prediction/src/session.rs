//! OracleSession: the explicit context object owning all mutable state.

use dicecast_core::config::DicecastConfig;
use dicecast_core::errors::DicecastResult;
use dicecast_core::models::{Forecast, LedgerEntry, PredictionRecord, RawRound};
use dicecast_observability::ingest_span;
use dicecast_sequence::{IngestReport, PatternMemory, SequenceStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::engine::{EngineOutput, PredictionEngine};
use crate::ledger::PredictionLedger;
use crate::weights::{WeightTracker, WeightVector};

/// Sequence Store, Pattern Memory, Prediction Ledger, weights and the
/// injected random source of one forecasting stream.
///
/// Independent sessions share nothing, so tests can run many in parallel.
#[derive(Debug)]
pub struct OracleSession {
    config: DicecastConfig,
    store: SequenceStore,
    memory: PatternMemory,
    ledger: PredictionLedger,
    tracker: WeightTracker,
    rng: StdRng,
    last_record: Option<PredictionRecord>,
}

impl OracleSession {
    /// Validates the configuration. `config.seed` makes coin draws
    /// reproducible; without it the source is entropy-seeded.
    pub fn new(config: DicecastConfig) -> DicecastResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            store: SequenceStore::from_config(&config.store),
            memory: PatternMemory::new(&config.pattern.orders),
            ledger: PredictionLedger::from_config(&config.store),
            tracker: WeightTracker::new(&config),
            rng,
            last_record: None,
            config,
        })
    }

    /// Append a batch, rebuild derived state, settle the ledger and let the
    /// weight tracker react. Malformed records are dropped and reported.
    pub fn ingest(&mut self, batch: &[RawRound]) -> IngestReport {
        let _span = ingest_span!(batch.len()).entered();
        let report = self.store.ingest(batch);
        if report.changed() {
            self.memory.rebuild(&self.store.categories());
        }
        let settled = self.ledger.settle(&self.store);
        let updated = settled > 0 && self.tracker.observe(&self.ledger);
        info!(
            accepted = report.accepted.len(),
            duplicates = report.duplicates,
            stale = report.stale,
            dropped = report.rejected.len(),
            settled,
            weights_updated = updated,
            "batch ingested"
        );
        report
    }

    /// Forecast from the current state and record it in the ledger.
    pub fn forecast(&mut self) -> Forecast {
        self.forecast_detailed().forecast
    }

    /// Like `forecast`, keeping votes and fusion details.
    pub fn forecast_detailed(&mut self) -> EngineOutput {
        let weights = self.tracker.voting_weights(&self.ledger);
        let output = PredictionEngine::new(&self.config).forecast(
            &self.store,
            &self.memory,
            &weights,
            &mut self.rng,
        );
        if let (Some(record), Some(basis)) = (&output.record, output.forecast.basis_round) {
            let entry = LedgerEntry::new(basis, record.clone(), output.forecast.confidence);
            if !self.ledger.record(entry) {
                debug!(round_id = basis, "forecast for known basis round not re-recorded");
            }
            // Mirror the ledger: the first record for a basis round wins.
            self.last_record = self.ledger.get(basis).map(|e| e.record.clone());
        }
        output
    }

    /// Ingest then forecast.
    pub fn cycle(&mut self, batch: &[RawRound]) -> Forecast {
        self.ingest(batch);
        self.forecast()
    }

    pub fn config(&self) -> &DicecastConfig {
        &self.config
    }

    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    pub fn memory(&self) -> &PatternMemory {
        &self.memory
    }

    pub fn ledger(&self) -> &PredictionLedger {
        &self.ledger
    }

    pub fn tracker(&self) -> &WeightTracker {
        &self.tracker
    }

    pub fn voting_weights(&self) -> WeightVector {
        self.tracker.voting_weights(&self.ledger)
    }

    pub fn last_record(&self) -> Option<&PredictionRecord> {
        self.last_record.as_ref()
    }

    pub fn pattern_table(&self) -> DicecastResult<serde_json::Value> {
        Ok(self.memory.to_json()?)
    }
}
