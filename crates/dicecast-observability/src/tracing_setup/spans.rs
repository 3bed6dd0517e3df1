//! Span definitions per cycle phase: cycle, ingest, fusion, weights.

/// Create a span around one full cycle.
#[macro_export]
macro_rules! cycle_span {
    ($batch_size:expr, $stored:expr) => {
        tracing::info_span!("dicecast.cycle", batch_size = $batch_size, stored = $stored)
    };
}

/// Create an ingestion span.
#[macro_export]
macro_rules! ingest_span {
    ($batch_size:expr) => {
        tracing::debug_span!("dicecast.ingest", batch_size = $batch_size)
    };
}

/// Create a fusion span.
#[macro_export]
macro_rules! fusion_span {
    ($votes:expr) => {
        tracing::debug_span!("dicecast.fusion", votes = $votes)
    };
}

/// Create a weight-update span.
#[macro_export]
macro_rules! weights_span {
    ($settled:expr, $update:expr) => {
        tracing::debug_span!("dicecast.weights", settled = $settled, update = $update)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CYCLE: &str = "dicecast.cycle";
    pub const INGEST: &str = "dicecast.ingest";
    pub const FUSION: &str = "dicecast.fusion";
    pub const WEIGHTS: &str = "dicecast.weights";
}
