//! A consistent, read-only view of everything the predictors consume.

use dicecast_core::config::DicecastConfig;
use dicecast_core::models::{Category, Round};
use dicecast_sequence::markov::{self, MarkovEstimate};
use dicecast_sequence::streak::{self, BreakBreakdown, Streak};
use dicecast_sequence::{stats, PatternMemory, SequenceStore};

/// Snapshot of store-derived state for one prediction cycle.
///
/// Built once per cycle so every predictor sees the same streak, break
/// probability and Markov estimate.
pub struct PredictionContext<'a> {
    pub rounds: &'a [Round],
    pub categories: Vec<Category>,
    pub memory: &'a PatternMemory,
    pub config: &'a DicecastConfig,
    pub streak: Streak,
    pub breakdown: BreakBreakdown,
    pub markov: MarkovEstimate,
}

impl<'a> PredictionContext<'a> {
    pub fn new(store: &'a SequenceStore, memory: &'a PatternMemory, config: &'a DicecastConfig) -> Self {
        let categories = store.categories();
        let breakdown = streak::break_breakdown(&categories, &config.streak);
        let markov = markov::estimate(&categories, &config.markov);
        Self {
            rounds: store.rounds(),
            streak: breakdown.streak,
            breakdown,
            markov,
            categories,
            memory,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Most recent category.
    pub fn last(&self) -> Option<Category> {
        self.categories.last().copied()
    }

    /// The last `k` categories.
    pub fn window(&self, k: usize) -> &[Category] {
        stats::tail(&self.categories, k)
    }

    /// The last `k` rounds.
    pub fn round_window(&self, k: usize) -> &[Round] {
        stats::tail(self.rounds, k)
    }

    pub fn break_probability(&self) -> f64 {
        self.breakdown.probability
    }
}
