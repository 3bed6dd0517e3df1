//! Fusion Engine: weighted vote, structural corrections, confidence.
//!
//! Pure: the outcome depends only on the votes, the weights and the
//! context. Recording the result in the ledger is the engine's job.

pub mod confidence;
pub mod corrections;

use dicecast_core::config::{FusionConfig, RosterEntry};
use dicecast_core::models::Category;
use dicecast_observability::fusion_span;
use serde::Serialize;
use tracing::trace;

pub use corrections::{Correction, Scores};

use crate::context::PredictionContext;
use crate::predictors::Vote;
use crate::r2;
use crate::weights::WeightVector;

/// The fused answer and everything that shaped it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusionOutcome {
    pub category: Category,
    pub confidence: f64,
    /// Scores after corrections.
    pub scores: Scores,
    pub margin: f64,
    pub corrections: Vec<Correction>,
    /// Pattern confidence signal blended into `confidence`.
    pub signal: f64,
}

/// Weight a single vote carries.
pub fn vote_weight(entry: &RosterEntry, vote: &Vote, weights: &WeightVector) -> f64 {
    match (entry.signal_weighted, vote.strength) {
        (true, Some(strength)) => strength,
        _ => weights.get(entry.kind),
    }
}

/// Fuse roster-ordered votes into one call.
pub fn fuse(
    votes: &[Vote],
    weights: &WeightVector,
    ctx: &PredictionContext<'_>,
    config: &FusionConfig,
) -> FusionOutcome {
    let _span = fusion_span!(votes.len()).entered();

    let mut scores = Scores::default();
    for (entry, vote) in config.roster.iter().zip(votes) {
        if let Some(guess) = vote.guess {
            let w = vote_weight(entry, vote, weights);
            scores.add(guess, w);
            trace!(predictor = %vote.kind, guess = %guess, weight = w, "vote counted");
        }
    }

    let corrections = corrections::apply_all(&mut scores, &ctx.categories, ctx.streak.len, config);
    let category = scores.leader();
    let margin = scores.margin();

    let signal = votes
        .iter()
        .find_map(|v| v.confidence.filter(|_| v.guess.is_some()))
        .unwrap_or(config.signal_fallback);
    let reverses_last = ctx.last().is_some_and(|last| last != category);
    let confidence = confidence::fused_confidence(
        margin,
        signal,
        reverses_last,
        ctx.break_probability(),
        config,
    );

    FusionOutcome {
        category,
        confidence,
        scores,
        margin,
        corrections,
        signal,
    }
}

/// Diagnostic explanation: every vote's rationale, the scores and margin,
/// and the weight vector when one is given.
pub fn explain(votes: &[Vote], outcome: &FusionOutcome, weights: Option<&WeightVector>) -> String {
    let mut parts: Vec<String> = votes.iter().map(Vote::describe).collect();
    parts.push(format!(
        "scores big={:.2} small={:.2} margin={:.2}",
        outcome.scores.big,
        outcome.scores.small,
        r2(outcome.margin)
    ));
    if !outcome.corrections.is_empty() {
        let names: Vec<&str> = outcome
            .corrections
            .iter()
            .map(|c| match c {
                Correction::Momentum { .. } => "momentum",
                Correction::BadPattern { .. } => "bad_pattern",
                Correction::Skew { .. } => "skew",
            })
            .collect();
        parts.push(format!("corrections {}", names.join(",")));
    }
    if let Some(w) = weights {
        parts.push(format!("weights {w}"));
    }
    parts.join(" | ")
}
