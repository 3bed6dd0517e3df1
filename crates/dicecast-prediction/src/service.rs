//! OracleService: serialises whole cycles over one session.
//!
//! A cycle (ingest, rebuild, predict, record) runs to completion under a
//! single `Mutex`. The last finished forecast is cached behind an `RwLock`
//! so `latest()` never waits on a running cycle.

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock};

use dicecast_core::config::DicecastConfig;
use dicecast_core::errors::DicecastResult;
use dicecast_core::models::{Forecast, LedgerEntry, PredictionRecord, RawRound};
use dicecast_core::traits::{IForecaster, IRoundFeed};
use dicecast_observability::cycle_span;
use tracing::{info, warn};

use crate::ledger::AccuracySummary;
use crate::session::OracleSession;
use crate::weights::WeightVector;

pub struct OracleService {
    session: Mutex<OracleSession>,
    latest: RwLock<Option<Forecast>>,
}

impl OracleService {
    pub fn new(config: DicecastConfig) -> DicecastResult<Self> {
        Ok(Self::from_session(OracleSession::new(config)?))
    }

    pub fn from_session(session: OracleSession) -> Self {
        Self {
            session: Mutex::new(session),
            latest: RwLock::new(None),
        }
    }

    /// Fetch from the feed, then cycle. A failed fetch leaves every piece of
    /// state untouched and the forecast is served from the last good state.
    pub fn refresh(&self, feed: &dyn IRoundFeed) -> Forecast {
        match feed.fetch() {
            Ok(batch) => self.cycle(batch),
            Err(err) => {
                warn!(error = %err, "feed refresh failed, serving previous state");
                self.predict()
            }
        }
    }

    /// Last completed forecast, without waiting for a running cycle.
    pub fn latest(&self) -> Option<Forecast> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn accuracy(&self) -> AccuracySummary {
        self.lock().ledger().accuracy()
    }

    pub fn voting_weights(&self) -> WeightVector {
        self.lock().voting_weights()
    }

    /// Run `f` inside the critical section.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut OracleSession) -> T) -> T {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, OracleSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Callers hold the session lock.
    fn publish(&self, forecast: &Forecast) {
        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = Some(forecast.clone());
    }
}

impl IForecaster for OracleService {
    fn cycle(&self, batch: Vec<RawRound>) -> Forecast {
        let mut session = self.lock();
        let _span = cycle_span!(batch.len(), session.store().len()).entered();
        let forecast = session.cycle(&batch);
        info!(
            category = %forecast.category,
            confidence = forecast.confidence,
            basis_round = ?forecast.basis_round,
            "cycle complete"
        );
        // Published under the session lock so cycles land in order.
        self.publish(&forecast);
        forecast
    }

    fn predict(&self) -> Forecast {
        let mut session = self.lock();
        let forecast = session.forecast();
        self.publish(&forecast);
        forecast
    }

    fn last_record(&self) -> Option<PredictionRecord> {
        self.lock().last_record().cloned()
    }

    fn ledger(&self) -> Vec<LedgerEntry> {
        self.lock().ledger().snapshot()
    }

    fn pattern_table(&self) -> DicecastResult<serde_json::Value> {
        self.lock().pattern_table()
    }
}
