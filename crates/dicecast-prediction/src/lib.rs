//! # dicecast-prediction
//!
//! Forecasts the next round by fusing independent heuristics.
//!
//! ## Pipeline
//!
//! ```text
//! SequenceStore ─┬─> PatternMemory ─┐
//!                ├─> streak/markov ─┼─> predictors ─> fusion ─> Forecast
//!                └──────────────────┘         ▲            │
//!                         WeightTracker ──────┘            ▼
//!                               ▲                   PredictionLedger
//!                               └────────────────────────┘
//! ```
//!
//! `OracleSession` owns every piece of mutable state; `OracleService`
//! serialises whole cycles behind one lock.

pub mod context;
pub mod engine;
pub mod fusion;
pub mod ledger;
pub mod predictors;
pub mod service;
pub mod session;
pub mod weights;

pub use context::PredictionContext;
pub use engine::{EngineOutput, PredictionEngine};
pub use fusion::{Correction, FusionOutcome};
pub use ledger::{AccuracySummary, PredictionLedger};
pub use predictors::Vote;
pub use service::OracleService;
pub use session::OracleSession;
pub use weights::{WeightTracker, WeightVector};

/// Round to two decimals for reporting.
pub(crate) fn r2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
