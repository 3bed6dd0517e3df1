use crate::errors::DicecastResult;
use crate::models::{Forecast, LedgerEntry, PredictionRecord, RawRound};

/// Operations exposed to the serving collaborator.
///
/// Introspection methods return snapshots; nothing reachable through them
/// mutates state.
pub trait IForecaster: Send + Sync {
    /// Ingest a batch, rebuild derived state, forecast and record the result.
    fn cycle(&self, batch: Vec<RawRound>) -> Forecast;

    /// Forecast from the current state and record the result.
    fn predict(&self) -> Forecast;

    /// Per-predictor record for the latest basis round.
    fn last_record(&self) -> Option<PredictionRecord>;

    /// Snapshot of the Prediction Ledger, oldest first.
    fn ledger(&self) -> Vec<LedgerEntry>;

    /// Pattern Memory rendered as JSON.
    fn pattern_table(&self) -> DicecastResult<serde_json::Value>;
}
