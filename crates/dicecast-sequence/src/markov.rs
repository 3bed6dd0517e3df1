//! First-order Markov Estimator over the whole retained sequence.

use dicecast_core::config::MarkovConfig;
use dicecast_core::models::Category;
use serde::Serialize;

/// `counts[from][to]`, indexed Big = 0, Small = 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransitionCounts {
    counts: [[u32; 2]; 2],
}

fn index(c: Category) -> usize {
    match c {
        Category::Big => 0,
        Category::Small => 1,
    }
}

impl TransitionCounts {
    pub fn from_sequence(seq: &[Category]) -> Self {
        let mut counts = [[0u32; 2]; 2];
        for w in seq.windows(2) {
            counts[index(w[0])][index(w[1])] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, from: Category, to: Category) -> u32 {
        self.counts[index(from)][index(to)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkovEstimate {
    pub p_big: f64,
    pub p_small: f64,
    /// Category the estimate is conditioned on.
    pub from: Option<Category>,
    /// True when history was too short and the uniform prior was returned.
    pub uniform: bool,
}

impl MarkovEstimate {
    pub const UNIFORM: Self = Self {
        p_big: 0.5,
        p_small: 0.5,
        from: None,
        uniform: true,
    };

    /// `Big` when `p_big >= 0.5`.
    pub fn leaning(&self) -> Category {
        Category::argmax(self.p_big, self.p_small)
    }
}

/// Laplace-smoothed `P(next | current)`; uniform below `min_history`.
pub fn estimate(seq: &[Category], config: &MarkovConfig) -> MarkovEstimate {
    let Some(&current) = seq.last() else {
        return MarkovEstimate::UNIFORM;
    };
    if seq.len() < config.min_history {
        return MarkovEstimate::UNIFORM;
    }
    let counts = TransitionCounts::from_sequence(seq);
    let a = counts.get(current, Category::Big) as f64 + 1.0;
    let b = counts.get(current, Category::Small) as f64 + 1.0;
    let p_big = a / (a + b);
    MarkovEstimate {
        p_big,
        p_small: 1.0 - p_big,
        from: Some(current),
        uniform: false,
    }
}
