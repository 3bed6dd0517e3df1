use dicecast_core::models::{Category, PredictorKind};
use rand::RngCore;

use super::{flip_last, Vote};
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::Trend;

/// Exponentially recency-weighted vote over a trailing window.
///
/// Position `i` (oldest = 0) weighs `base^i`. When the weighted imbalance
/// reaches `threshold` of the total the heavier side wins; otherwise the
/// guess reverts against the last outcome.
pub fn evaluate(ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    let cfg = &ctx.config.predictors.trend;
    if ctx.len() < cfg.min_history {
        return Vote::coin_fallback(KIND, cfg.min_history, ctx.len(), rng);
    }

    let (big, small) = weighted_sides(ctx.window(cfg.window), cfg.base);
    let total = big + small;
    let imbalance = (big - small).abs() / total;

    let (guess, how) = if imbalance >= cfg.threshold {
        (Category::argmax(big, small), "follow")
    } else {
        (flip_last(ctx), "revert")
    };

    Vote::new(
        KIND,
        guess,
        format!("{how} big={big:.2} small={small:.2} imbalance={imbalance:.2}"),
    )
    .with_probability(big / total)
}

/// Recency-weighted mass of each category.
pub fn weighted_sides(window: &[Category], base: f64) -> (f64, f64) {
    window
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(big, small), (i, &c)| {
            let w = base.powi(i as i32);
            match c {
                Category::Big => (big + w, small),
                Category::Small => (big, small + w),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicecast_core::models::Category::{Big as B, Small as S};

    #[test]
    fn recent_positions_weigh_more() {
        let (big, small) = weighted_sides(&[S, B], 2.0);
        assert_eq!(big, 2.0);
        assert_eq!(small, 1.0);
    }
}
