//! Gradient-update and performance-multiplier weighting through a session.

use dicecast_core::config::{DicecastConfig, WeightingMode};
use dicecast_core::models::{Category, PredictorKind};
use dicecast_prediction::{OracleSession, WeightTracker};
use test_fixtures::raw_batch;
use test_fixtures::rounds_from_tokens;

const TOKENS: &str = "BBSBSSBBBSBSSBSBBSSSBBSBBSBSSB";

fn drive(config: DicecastConfig) -> OracleSession {
    let mut s = OracleSession::new(config.with_seed(11)).unwrap();
    for round in rounds_from_tokens(TOKENS, 1) {
        s.cycle(&raw_batch(&[round]));
    }
    s
}

#[test]
fn gradient_vector_starts_normalized() {
    let tracker = WeightTracker::new(&DicecastConfig::adaptive());
    assert_eq!(tracker.mode(), WeightingMode::GradientUpdate);
    assert!((tracker.vector().sum() - 1.0).abs() < 1e-9);
    assert!((tracker.vector().get(PredictorKind::Dice) - 0.20).abs() < 1e-9);
}

#[test]
fn gradient_updates_once_per_lookback_window() {
    let config = DicecastConfig::adaptive();
    assert_eq!(config.weighting.update_interval, config.weighting.lookback);

    let s = drive(config);
    // 29 settled entries: one full window of 18.
    assert_eq!(s.ledger().settled_count(), 29);
    assert_eq!(s.tracker().updates(), 1);

    let weights = s.voting_weights();
    assert!((weights.sum() - 1.0).abs() < 1e-6, "sum = {}", weights.sum());
    for (kind, w) in weights.iter() {
        assert!((0.02 - 1e-9..=0.40 + 1e-9).contains(&w), "{kind} = {w}");
    }
}

#[test]
fn gradient_cadence_follows_lookback() {
    let tokens = TOKENS.repeat(2);
    let mut s = OracleSession::new(DicecastConfig::adaptive().with_seed(11)).unwrap();
    let mut updates_at = Vec::new();
    for round in rounds_from_tokens(&tokens, 1) {
        let before = s.tracker().updates();
        s.cycle(&raw_batch(&[round]));
        if s.tracker().updates() > before {
            updates_at.push(s.ledger().settled_count());
        }
    }
    assert_eq!(updates_at, vec![18, 36, 54]);
}

#[test]
fn gradient_waits_for_minimum_entries() {
    let mut s = OracleSession::new(DicecastConfig::adaptive().with_seed(3)).unwrap();
    for round in rounds_from_tokens("BSBSBSBS", 1) {
        s.cycle(&raw_batch(&[round]));
    }
    assert_eq!(s.tracker().updates(), 0);
}

#[test]
fn performance_weights_scale_base_weights() {
    let s = drive(DicecastConfig::classic());
    assert_eq!(s.tracker().updates(), 0);
    let weights = s.voting_weights();
    for entry in &s.config().fusion.roster {
        let m = s.tracker().multiplier(entry.kind, s.ledger());
        assert!((0.6..=1.6).contains(&m));
        assert!((weights.get(entry.kind) - entry.base_weight * m).abs() < 1e-12);
    }
}

#[test]
fn gradient_rationale_lists_weights() {
    let mut s = drive(DicecastConfig::adaptive());
    let forecast = s.forecast();
    assert!(forecast.rationale.contains("weights "));
    assert!(forecast.rationale.contains("dice="));
    assert!(Category::ALL.contains(&forecast.category));
}
