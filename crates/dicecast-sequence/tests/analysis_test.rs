use dicecast_core::config::{MarkovConfig, StreakConfig};
use dicecast_core::models::Category;
use dicecast_sequence::pattern_memory::Context;
use dicecast_sequence::{markov, stats, streak, PatternMemory};
use test_fixtures::{alternating, seq};

// The break probability is a heuristic score, not a calibrated estimator.
// These tests pin its shape, not its accuracy.

#[test]
fn streak_after_a_break_is_one() {
    let s = seq("BBBBBBBS");
    let st = streak::streak(&s);
    assert_eq!(st.len, 1);
    assert_eq!(st.category, Some(Category::Small));
}

#[test]
fn break_probability_at_seven_is_high() {
    let config = StreakConfig::default();
    let p = streak::break_probability(&seq("BBBBBBB"), &config);
    assert!(p >= 0.6, "expected high band, got {p}");
}

#[test]
fn break_breakdown_exposes_terms() {
    let config = StreakConfig::default();
    let b = streak::break_breakdown(&seq("SBBBBBBB"), &config);
    assert_eq!(b.streak.len, 7);
    assert_eq!(b.base, 0.60);
    assert_eq!(b.switches, 1);
    assert!((b.switch_term - 0.02).abs() < 1e-12);
    assert_eq!(b.skew_bonus, 0.08);
    assert!((b.probability - 0.70).abs() < 1e-9);
}

#[test]
fn empty_sequence_has_floor_probability() {
    let config = StreakConfig::default();
    let b = streak::break_breakdown(&[], &config);
    assert_eq!(b.streak.len, 0);
    assert_eq!(b.streak.category, None);
    assert!((b.probability - 0.25).abs() < 1e-12);
}

#[test]
fn break_probability_respects_band() {
    let config = StreakConfig {
        max: 0.5,
        ..Default::default()
    };
    let p = streak::break_probability(&seq("BBBBBBBBBBBB"), &config);
    assert_eq!(p, 0.5);
}

#[test]
fn markov_is_uniform_below_min_history() {
    let est = markov::estimate(&seq("BBSBB"), &MarkovConfig::default());
    assert!(est.uniform);
    assert_eq!(est.p_big, 0.5);
}

#[test]
fn markov_uses_laplace_smoothing() {
    // From B: B->B twice, B->S once. (2+1)/(3+2) = 0.6
    let est = markov::estimate(&seq("BBBSSB"), &MarkovConfig::default());
    assert!(!est.uniform);
    assert_eq!(est.from, Some(Category::Big));
    assert!((est.p_big - 0.6).abs() < 1e-12);
    assert_eq!(est.leaning(), Category::Big);
}

#[test]
fn pattern_memory_counts_followers() {
    let memory = PatternMemory::build(&[3, 4, 5], &seq("BSBSBSB"));
    let counts = memory.lookup(3, &seq("BSB")).unwrap();
    assert_eq!(counts.small, 2);
    assert_eq!(counts.big, 0);
    let counts = memory.lookup(3, &seq("SBS")).unwrap();
    assert_eq!(counts.big, 2);
}

#[test]
fn unseen_context_is_absent() {
    let memory = PatternMemory::build(&[3, 4, 5], &seq("BSBSBSB"));
    assert!(memory.lookup(5, &seq("BBBBB")).is_none());
    assert!(memory.lookup(7, &seq("BSBSBSB")).is_none());
    assert!(memory.lookup(3, &seq("BS")).is_none());
}

#[test]
fn lookup_longest_falls_back_to_shorter_order() {
    // "SSBB" never preceded anything, but "SBB" did.
    let memory = PatternMemory::build(&[3, 4, 5], &seq("BSBBSBBS"));
    let hit = memory.lookup_longest(&seq("BBSSBB")).unwrap();
    assert_eq!(hit.order, 3);
    assert_eq!(hit.context, Context::from_tokens("SBB").unwrap());
    assert_eq!(hit.counts.small, 2);
}

#[test]
fn lookup_longest_returns_none_without_data() {
    let memory = PatternMemory::build(&[3, 4, 5], &seq("BB"));
    assert!(memory.is_empty());
    assert!(memory.lookup_longest(&seq("BBBBB")).is_none());
}

#[test]
fn pattern_memory_serializes_token_keys() {
    let memory = PatternMemory::build(&[3], &seq("BSBSB"));
    let json = memory.to_json().unwrap();
    assert_eq!(json["3"]["BSB"]["small"], 1);
    assert_eq!(json["3"]["SBS"]["big"], 1);
    assert_eq!(json["3"]["SBS"]["small"], 0);
}

#[test]
fn alternating_sequence_switch_rate() {
    let s = alternating(10, Category::Big);
    assert_eq!(stats::switches(&s), 9);
    assert!((stats::switch_rate(&s) - 1.0).abs() < 1e-12);
}
