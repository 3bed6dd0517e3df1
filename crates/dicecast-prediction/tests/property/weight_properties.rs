use dicecast_core::config::DicecastConfig;
use dicecast_core::models::{Category, PredictorKind};
use dicecast_prediction::weights::gradient::bounded_normalize;
use dicecast_prediction::{OracleSession, WeightVector};
use proptest::prelude::*;
use test_fixtures::{raw_batch, rounds_from_categories};

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Big), Just(Category::Small)]
}

fn arb_weights() -> impl Strategy<Value = WeightVector> {
    prop::collection::vec(0.01f64..5.0, PredictorKind::ALL.len()).prop_map(|ws| {
        WeightVector::from_pairs(PredictorKind::ALL.into_iter().zip(ws))
    })
}

proptest! {
    #[test]
    fn bounded_normalize_sums_to_one_within_band(mut w in arb_weights()) {
        bounded_normalize(&mut w, 0.02, 0.40);
        prop_assert!((w.sum() - 1.0).abs() < 1e-6, "sum = {}", w.sum());
        for (kind, v) in w.iter() {
            prop_assert!((0.02..=0.40).contains(&v), "{} = {}", kind, v);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn gradient_weights_stay_normalized(seq in prop::collection::vec(arb_category(), 12..60)) {
        let config = DicecastConfig::adaptive().with_seed(1);
        let (min, max) = (config.weighting.weight_min, config.weighting.weight_max);
        let mut session = OracleSession::new(config).unwrap();
        for round in rounds_from_categories(&seq, 1) {
            session.cycle(&raw_batch(&[round]));
            let w = session.voting_weights();
            prop_assert!((w.sum() - 1.0).abs() < 1e-6, "sum = {}", w.sum());
            prop_assert!(w.values().all(|v| v >= min && v <= max));
        }
    }

    #[test]
    fn confidence_stays_in_band(seq in prop::collection::vec(arb_category(), 1..80)) {
        let mut session = OracleSession::new(DicecastConfig::default().with_seed(2)).unwrap();
        let forecast = session.cycle(&raw_batch(&rounds_from_categories(&seq, 1)));
        prop_assert!((0.52..=0.98).contains(&forecast.confidence));
        prop_assert_eq!(forecast.recent_digest.len(), seq.len().min(20));
    }
}
