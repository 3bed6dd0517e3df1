//! # dicecast-core
//!
//! Foundation crate for the Dicecast prediction ensemble.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DicecastConfig;
pub use errors::{DicecastError, DicecastResult};
pub use models::{Category, Dice, Fallback, Forecast, PredictorKind, RawRound, Round, RoundId};
