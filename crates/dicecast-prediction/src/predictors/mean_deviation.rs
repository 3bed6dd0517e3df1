use dicecast_core::models::{Category, PredictorKind};
use dicecast_sequence::stats::CategoryCounts;
use rand::RngCore;

use super::{flip_last, Vote};
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::MeanDeviation;

/// Mean reversion against category imbalance.
///
/// A near-balanced window flips the last outcome; an imbalanced one bets on
/// the minority category catching up.
pub fn evaluate(ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    let cfg = &ctx.config.predictors.mean_deviation;
    let window = ctx.window(cfg.window);
    if window.len() < cfg.min_history {
        return Vote::coin_fallback(KIND, cfg.min_history, window.len(), rng);
    }

    let counts = CategoryCounts::of(window);
    let imbalance = counts.imbalance();
    let (guess, how) = if imbalance < cfg.balance_threshold {
        (flip_last(ctx), "balanced, flip last")
    } else if counts.big > counts.small {
        (Category::Small, "big-heavy, expect small")
    } else {
        (Category::Big, "small-heavy, expect big")
    };

    Vote::new(
        KIND,
        guess,
        format!("{how} (big={} small={} imbalance={imbalance:.2})", counts.big, counts.small),
    )
}
