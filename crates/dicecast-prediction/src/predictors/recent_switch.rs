use dicecast_core::models::PredictorKind;
use dicecast_sequence::stats;
use rand::RngCore;

use super::{flip_last, Vote};
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::RecentSwitch;

/// Alternation count over a trailing window.
///
/// Both branches guess the flip of the last outcome, so this voter is a
/// constant-direction structural signal rather than a directional one.
/// The threshold only changes the rationale.
pub fn evaluate(ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    let cfg = &ctx.config.predictors.recent_switch;
    let window = ctx.window(cfg.window);
    if window.len() < cfg.min_history {
        return Vote::coin_fallback(KIND, cfg.min_history, window.len(), rng);
    }

    let switches = stats::switches(window);
    let (guess, regime) = if switches >= cfg.switch_threshold {
        (flip_last(ctx), "choppy")
    } else {
        (flip_last(ctx), "steady")
    };

    Vote::new(KIND, guess, format!("{regime}, {switches} switches, flip last"))
}
