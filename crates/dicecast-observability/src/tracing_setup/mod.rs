//! Tracing initialization.

pub mod spans;

use std::sync::Once;

use dicecast_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "dicecast=info";

/// Install the global subscriber.
///
/// Reads `DICECAST_LOG` for per-crate levels, e.g.
/// `DICECAST_LOG=dicecast_prediction=debug,dicecast_sequence=warn`.
/// Falls back to `dicecast=info` when unset or invalid.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize from the `observability` config section: `log_env` names the
/// filter variable, `log_level` is the fallback level, `json` switches the
/// output format.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(&config.log_env).unwrap_or_else(|_| {
        EnvFilter::try_new(format!("dicecast={}", config.log_level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    });
    install(filter, config.json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // Another subscriber may already be installed by the host.
        let _ = result;
    });
}
