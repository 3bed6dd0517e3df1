//! The Heuristic Predictor Set.
//!
//! Every predictor is a pure function of the prediction context (plus the
//! injected random source for coin-draw defaults) that returns a `Vote`.
//! Dispatch goes through `evaluate`, one arm per `PredictorKind`.

pub mod dice;
pub mod markov_vote;
pub mod mean_deviation;
pub mod ngram;
pub mod ngram_window;
pub mod recent_switch;
pub mod short_pattern;
pub mod streak_break;
pub mod trend;

use dicecast_core::errors::HistoryError;
use dicecast_core::models::{Category, Fallback, PredictorKind};
use rand::{Rng, RngCore};
use serde::Serialize;

use crate::context::PredictionContext;

/// One predictor's output for a cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vote {
    pub kind: PredictorKind,
    /// `None` means the predictor abstains and contributes nothing.
    pub guess: Option<Category>,
    /// Estimated `P(next = Big)`, for predictors that compute one.
    pub probability: Option<f64>,
    /// Self-reported vote weight, used when the roster asks for it.
    pub strength: Option<f64>,
    /// Pattern-specific confidence blended into the fused confidence.
    pub confidence: Option<f64>,
    pub rationale: String,
    pub fallback: Option<Fallback>,
}

impl Vote {
    pub fn new(kind: PredictorKind, guess: Category, rationale: impl Into<String>) -> Self {
        Self {
            kind,
            guess: Some(guess),
            probability: None,
            strength: None,
            confidence: None,
            rationale: rationale.into(),
            fallback: None,
        }
    }

    pub fn abstain(kind: PredictorKind, rationale: impl Into<String>) -> Self {
        Self {
            guess: None,
            ..Self::new(kind, Category::Big, rationale)
        }
    }

    /// A coin draw because fewer than `needed` rounds are available.
    pub fn coin_fallback(
        kind: PredictorKind,
        needed: usize,
        available: usize,
        rng: &mut dyn RngCore,
    ) -> Self {
        let reason = HistoryError::InsufficientHistory { needed, available };
        Self::new(kind, coin(rng), format!("coin draw, {reason}"))
            .with_fallback(insufficient(kind, needed, available))
    }

    pub fn with_probability(mut self, p_big: f64) -> Self {
        self.probability = Some(p_big);
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// `name: rationale` for the fused explanation.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind, self.rationale)
    }
}

/// Run one predictor.
pub fn evaluate(kind: PredictorKind, ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    match kind {
        PredictorKind::Trend => trend::evaluate(ctx, rng),
        PredictorKind::ShortPattern => short_pattern::evaluate(ctx, rng),
        PredictorKind::MeanDeviation => mean_deviation::evaluate(ctx, rng),
        PredictorKind::RecentSwitch => recent_switch::evaluate(ctx, rng),
        PredictorKind::Markov => markov_vote::evaluate(ctx),
        PredictorKind::StreakBreak => streak_break::evaluate(ctx, rng),
        PredictorKind::NGram => ngram::evaluate(ctx, rng),
        PredictorKind::NGramWindow => ngram_window::evaluate(ctx),
        PredictorKind::Dice => dice::evaluate(ctx, rng),
    }
}

/// Uniform coin draw between the two categories.
pub fn coin(rng: &mut dyn RngCore) -> Category {
    if rng.gen_bool(0.5) {
        Category::Big
    } else {
        Category::Small
    }
}

pub(crate) fn insufficient(kind: PredictorKind, needed: usize, available: usize) -> Fallback {
    Fallback::InsufficientHistory {
        predictor: kind,
        needed,
        available,
    }
}

/// The "flip of last outcome" default. Callers guarantee a non-empty context.
pub(crate) fn flip_last(ctx: &PredictionContext<'_>) -> Category {
    ctx.last().map_or(Category::Big, Category::flip)
}
