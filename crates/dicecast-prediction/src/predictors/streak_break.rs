use dicecast_core::constants::SUM_MIDPOINT;
use dicecast_core::models::{Category, PredictorKind};
use dicecast_sequence::stats;
use rand::RngCore;

use super::Vote;
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::StreakBreak;

const DRIFT_BAND: f64 = 0.3;
const MAX_SCORE: f64 = 0.95;

/// Streak-break analyzer.
///
/// Scores how likely the current run is to end from the streak length, the
/// Streak/Break Analyzer's probability, totals variance, staircase shapes,
/// recent alternation and the drift of mean sums around the midpoint. Above
/// the decision threshold it bets on the break, otherwise on continuation.
pub fn evaluate(ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    let cfg = &ctx.config.predictors.streak_break;
    let current = match ctx.streak.category {
        Some(c) if ctx.len() >= cfg.min_history => c,
        _ => return Vote::coin_fallback(KIND, cfg.min_history, ctx.len(), rng),
    };

    let totals = stats::totals_stats(ctx.round_window(cfg.totals_window));
    let recent = ctx.window(cfg.stair_window);
    let stair = staircase_steps(recent);
    let switches = stats::switches(recent);
    let break_p = ctx.break_probability();

    let mut score = match ctx.streak.len {
        n if n >= 7 => 0.35,
        n if n >= 5 => 0.20,
        _ => 0.08,
    };
    score += break_p * 0.6;
    if totals.variance > cfg.variance_threshold {
        score += 0.10;
    }
    if stair >= 2 {
        score += 0.06;
    }
    if switches >= 6 {
        score += 0.05;
    }
    if totals.mean > SUM_MIDPOINT + DRIFT_BAND {
        score += if current == Category::Big { -0.04 } else { 0.06 };
    }
    if totals.mean < SUM_MIDPOINT - DRIFT_BAND {
        score += if current == Category::Small { -0.04 } else { 0.06 };
    }
    let score = score.clamp(0.0, MAX_SCORE);

    let guess = if score > cfg.decision_threshold {
        current.flip()
    } else {
        current
    };
    Vote::new(
        KIND,
        guess,
        format!(
            "streak={} break_p={break_p:.2} avg={:.2} var={:.2} stair={stair} sw={switches} score={score:.2}",
            ctx.streak.len, totals.mean, totals.variance
        ),
    )
}

/// Positions where a pair forms right after a change, as in `B,S,S`.
pub fn staircase_steps(seq: &[Category]) -> usize {
    seq.windows(3)
        .filter(|w| w[2] == w[1] && w[0] != w[1])
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicecast_core::models::Category::{Big as B, Small as S};

    #[test]
    fn counts_staircase_steps() {
        assert_eq!(staircase_steps(&[B, B, S, S, B, B]), 2);
        assert_eq!(staircase_steps(&[B, S, B, S]), 0);
        assert_eq!(staircase_steps(&[B]), 0);
    }
}
