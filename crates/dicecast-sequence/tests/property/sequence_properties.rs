use dicecast_core::config::StreakConfig;
use dicecast_core::models::Category;
use dicecast_sequence::{streak, PatternMemory, SequenceStore};
use proptest::prelude::*;
use test_fixtures::rounds_from_categories;

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Big), Just(Category::Small)]
}

fn arb_sequence(max: usize) -> impl Strategy<Value = Vec<Category>> {
    prop::collection::vec(arb_category(), 0..max)
}

proptest! {
    #[test]
    fn break_probability_stays_in_band(s in arb_sequence(60)) {
        let config = StreakConfig::default();
        let p = streak::break_probability(&s, &config);
        prop_assert!(p >= config.min && p <= config.max, "p = {}", p);
    }

    #[test]
    fn break_probability_monotonic_in_streak(
        len in 0usize..30,
        switches in 0usize..20,
        entropy in 0.0f64..1.0,
    ) {
        let config = StreakConfig::default();
        let shorter = streak::break_probability_from(len, switches, entropy, &config);
        let longer = streak::break_probability_from(len + 1, switches, entropy, &config);
        prop_assert!(longer >= shorter);
    }

    #[test]
    fn store_never_exceeds_cap(s in arb_sequence(80), cap in 1usize..30) {
        let mut store = SequenceStore::new(cap);
        for r in rounds_from_categories(&s, 1) {
            store.append(r);
            prop_assert!(store.len() <= cap);
        }
        let kept = s.len().min(cap);
        prop_assert_eq!(store.len(), kept);
        prop_assert_eq!(store.tail(cap), store.rounds());
        if let Some(first) = store.rounds().first() {
            prop_assert_eq!(first.id as usize, s.len() - kept + 1);
        }
        prop_assert!(store.rounds().windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn pattern_rebuild_is_deterministic(s in arb_sequence(80)) {
        let built = PatternMemory::build(&[3, 4, 5], &s);
        let mut reused = PatternMemory::build(&[5, 3, 4], &s[..s.len() / 2]);
        reused.rebuild(&s);
        prop_assert_eq!(built, reused);
    }

    #[test]
    fn pattern_counts_cover_every_window(s in arb_sequence(80)) {
        let memory = PatternMemory::build(&[3], &s);
        let total: u32 = (0..8u8)
            .map(|bits| {
                let ctx: Vec<Category> = (0..3)
                    .map(|i| if bits >> i & 1 == 1 { Category::Big } else { Category::Small })
                    .collect();
                memory.lookup(3, &ctx).map_or(0, |c| c.total())
            })
            .sum();
        prop_assert_eq!(total as usize, s.len().saturating_sub(3));
    }
}
