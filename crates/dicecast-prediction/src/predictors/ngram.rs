use dicecast_core::models::{Category, PredictorKind};
use rand::RngCore;

use super::{coin, Vote};
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::NGram;

/// Longest-context Pattern Memory lookup.
///
/// Orders are tried longest first; the first context with recorded data
/// decides. An even split is settled by a coin draw. Abstains when no order
/// has data for the current tail.
pub fn evaluate(ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    let cfg = &ctx.config.predictors.ngram;
    if ctx.len() < cfg.min_history {
        return Vote::abstain(KIND, format!("none, {}/{} rounds", ctx.len(), cfg.min_history))
            .with_fallback(super::insufficient(KIND, cfg.min_history, ctx.len()));
    }

    let Some(hit) = ctx.memory.lookup_longest(&ctx.categories) else {
        return Vote::abstain(KIND, "none, no context with data");
    };

    let counts = hit.counts;
    let (guess, tie) = match counts.leader() {
        Some(c) => (c, ""),
        None => (coin(rng), ", tie drawn"),
    };
    let strength = cfg.base_strength + cfg.strength_scale * counts.lopsidedness();
    Vote::new(
        KIND,
        guess,
        format!(
            "{}-gram {} -> big:{}/small:{}{tie}",
            hit.order, hit.context, counts.big, counts.small
        ),
    )
    .with_probability(counts.smoothed_big())
    .with_strength(strength)
}
