use dicecast_core::models::PredictorKind;

use super::{insufficient, Vote};
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::Markov;

/// Votes the Markov estimator's leaning; the uniform prior leans big.
pub fn evaluate(ctx: &PredictionContext<'_>) -> Vote {
    let est = ctx.markov;
    let vote = Vote::new(KIND, est.leaning(), format!("p_big={:.2}", est.p_big))
        .with_probability(est.p_big);
    if est.uniform {
        vote.with_fallback(insufficient(KIND, ctx.config.markov.min_history, ctx.len()))
    } else {
        vote
    }
}
