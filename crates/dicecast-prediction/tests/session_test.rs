//! Prediction cycles end to end through `OracleSession`.

use dicecast_core::config::DicecastConfig;
use dicecast_core::models::{Category, Fallback, PredictorKind, Verdict};
use dicecast_prediction::OracleSession;
use test_fixtures::{malformed_record, raw_batch, raw_from_tokens, rounds_from_tokens, seq};

fn session() -> OracleSession {
    dicecast_observability::init_tracing_with_filter("dicecast=debug");
    OracleSession::new(DicecastConfig::default().with_seed(7)).unwrap()
}

// ─── Empty store ─────────────────────────────────────────────────────────────

#[test]
fn empty_store_answers_coin_at_half_confidence() {
    let mut s = session();
    let forecast = s.forecast();
    assert_eq!(forecast.confidence, 0.5);
    assert_eq!(forecast.rationale, "no data");
    assert!(Category::ALL.contains(&forecast.category));
    assert_eq!(forecast.fallbacks, vec![Fallback::EmptyStore]);
    assert!(forecast.recent_digest.is_empty());
    assert!(forecast.basis_round.is_none());
    assert!(s.ledger().is_empty());
    assert!(s.last_record().is_none());
}

// ─── Ledger ──────────────────────────────────────────────────────────────────

#[test]
fn repeated_cycle_records_one_entry_per_basis_round() {
    let mut s = session();
    let batch = raw_from_tokens("BSBBSBSSBB", 1);
    s.cycle(&batch);
    s.cycle(&batch);
    s.forecast();
    assert_eq!(s.ledger().len(), 1);
    assert_eq!(s.ledger().latest().unwrap().round_id, 10);
}

#[test]
fn last_record_matches_ledger_on_repeat_forecasts() {
    // Three rounds leave most predictors on coin fallbacks.
    for seed in 0..20 {
        let mut s = OracleSession::new(DicecastConfig::default().with_seed(seed)).unwrap();
        s.ingest(&raw_from_tokens("BSB", 1));
        s.forecast();
        let first = s.last_record().cloned().unwrap();
        for _ in 0..3 {
            s.forecast();
            assert_eq!(s.last_record(), Some(&first), "seed {seed}");
        }
        assert_eq!(s.ledger().get(3).map(|e| &e.record), Some(&first));
    }
}

#[test]
fn entries_settle_only_when_the_next_round_arrives() {
    let mut s = session();
    s.cycle(&raw_from_tokens("BSBBSBSSBB", 1));
    let entry = s.ledger().get(10).unwrap();
    assert!(!entry.is_settled());

    s.cycle(&raw_from_tokens("S", 11));
    let entry = s.ledger().get(10).unwrap();
    assert_eq!(entry.actual, Some(Category::Small));
    let expected = if entry.predicted == Category::Small {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    };
    assert_eq!(entry.verdict, Some(expected));
    assert!(!s.ledger().get(11).unwrap().is_settled());
    assert_eq!(s.ledger().accuracy().settled, 1);
}

#[test]
fn multiplier_ignores_unsettled_forecasts() {
    let mut s = session();
    for (i, token) in "BBBBBB".chars().enumerate() {
        s.cycle(&raw_from_tokens(&token.to_string(), i as u64 + 1));
    }
    // Five settled entries exist; the sixth is still open.
    assert_eq!(s.ledger().settled_count(), 5);
    assert!(!s.ledger().latest().unwrap().is_settled());
    for kind in PredictorKind::ALL {
        let m = s.tracker().multiplier(kind, s.ledger());
        assert!((0.6..=1.6).contains(&m), "{kind}: {m}");
    }
}

// ─── Forecast shape ──────────────────────────────────────────────────────────

#[test]
fn digest_holds_last_twenty_tokens() {
    let tokens = "BSSBBBSBSSBSBBSSSBBSBSBBSSBSBS";
    let mut s = session();
    let forecast = s.cycle(&raw_from_tokens(tokens, 100));
    assert_eq!(forecast.recent_digest.len(), 20);
    assert_eq!(forecast.digest_string(), &tokens[10..]);
    assert_eq!(forecast.basis_round, Some(129));
    assert!((0.52..=0.98).contains(&forecast.confidence));
}

#[test]
fn short_history_is_annotated_not_hidden() {
    let mut s = session();
    let forecast = s.cycle(&raw_from_tokens("BSB", 1));
    assert!(forecast.is_degraded());
    assert!(forecast.fallbacks.iter().any(|f| matches!(
        f,
        Fallback::InsufficientHistory {
            predictor: PredictorKind::Trend,
            needed: 6,
            available: 3
        }
    )));
    assert!(forecast.rationale.contains("insufficient history"));
}

#[test]
fn record_covers_every_roster_predictor() {
    let mut s = session();
    s.cycle(&raw_from_tokens("BSBBSBSSBBSBSSBBBS", 1));
    let record = s.last_record().unwrap();
    for entry in &s.config().fusion.roster {
        assert!(record.guesses.contains_key(&entry.kind), "{}", entry.kind);
    }
}

#[test]
fn malformed_records_are_dropped_from_the_batch() {
    let mut s = session();
    let mut batch = raw_from_tokens("BSB", 1);
    batch.insert(1, malformed_record());
    let report = s.ingest(&batch);
    assert_eq!(report.accepted, vec![1, 2, 3]);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(s.store().len(), 3);
}

#[test]
fn unordered_batches_are_sorted_before_append() {
    let mut s = session();
    let mut rounds = rounds_from_tokens("BBSS", 1);
    rounds.reverse();
    s.ingest(&raw_batch(&rounds));
    let ids: Vec<u64> = s.store().rounds().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(s.store().categories(), seq("BBSS"));
}

// ─── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn seeded_sessions_agree() {
    let batch = raw_from_tokens("BSS", 1);
    let mut a = session();
    let mut b = session();
    let fa = a.cycle(&batch);
    let fb = b.cycle(&batch);
    assert_eq!(fa.category, fb.category);
    assert_eq!(fa.confidence, fb.confidence);
    assert_eq!(fa.rationale, fb.rationale);
}

#[test]
fn invalid_config_is_refused() {
    let mut config = DicecastConfig::default();
    config.store.max_history = 0;
    assert!(OracleSession::new(config).is_err());
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn alternating_sequence_votes() {
    let mut s = session();
    s.ingest(&raw_from_tokens("BSBSBSBSBS", 1));
    let output = s.forecast_detailed();
    let vote = |kind| output.votes.iter().find(|v| v.kind == kind).unwrap();

    let mean = vote(PredictorKind::MeanDeviation);
    assert_eq!(mean.guess, Some(Category::Big));
    assert!(mean.rationale.starts_with("balanced"));

    assert_eq!(vote(PredictorKind::RecentSwitch).guess, Some(Category::Big));

    let ngram = vote(PredictorKind::NGram);
    assert_eq!(ngram.guess, Some(Category::Big));
    assert!(ngram.rationale.starts_with("5-gram"));

    let fusion = output.fusion.unwrap();
    assert!(fusion.scores.big > 0.0);
}

#[test]
fn pattern_table_is_keyed_by_order() {
    let mut s = session();
    s.ingest(&raw_from_tokens("BSBSBSBS", 1));
    let table = s.pattern_table().unwrap();
    assert_eq!(table["3"]["BSB"]["small"], 3);
    assert_eq!(table["5"]["BSBSB"]["small"], 2);
}
