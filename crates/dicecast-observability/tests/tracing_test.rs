use dicecast_core::config::ObservabilityConfig;
use dicecast_observability::tracing_setup::spans::names;
use dicecast_observability::{cycle_span, init_from_config, init_tracing, init_tracing_with_filter};

#[test]
fn init_is_idempotent() {
    init_tracing_with_filter("dicecast=debug");
    init_tracing();
    init_from_config(&ObservabilityConfig {
        json: true,
        ..ObservabilityConfig::default()
    });
    tracing::info!("still logging after repeated init");
}

#[test]
fn span_names_match_macros() {
    init_tracing_with_filter("dicecast=trace");
    let span = cycle_span!(3usize, 10usize);
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::CYCLE);
    }
    let _entered = span.entered();
}

#[test]
fn default_config_reads_dicecast_log() {
    let config = ObservabilityConfig::default();
    assert_eq!(config.log_env, "DICECAST_LOG");
    assert!(!config.json);
}
