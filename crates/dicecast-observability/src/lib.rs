//! # dicecast-observability
//!
//! Structured logging for the forecasting pipeline: subscriber setup driven
//! by `DICECAST_LOG`, and one span macro per cycle phase.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
