//! Window statistics over category sequences and round totals.

use dicecast_core::models::{Category, Round};

/// The last `k` elements of `items` (fewer if unavailable).
pub fn tail<T>(items: &[T], k: usize) -> &[T] {
    &items[items.len().saturating_sub(k)..]
}

/// Number of adjacent positions whose categories differ.
pub fn switches(seq: &[Category]) -> usize {
    seq.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Switches per opportunity, `0.0` for fewer than two rounds.
pub fn switch_rate(seq: &[Category]) -> f64 {
    if seq.len() < 2 {
        return 0.0;
    }
    switches(seq) as f64 / (seq.len() - 1) as f64
}

/// Occurrences of each category in a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub big: usize,
    pub small: usize,
}

impl CategoryCounts {
    pub fn of(seq: &[Category]) -> Self {
        let big = seq.iter().filter(|&&c| c == Category::Big).count();
        Self {
            big,
            small: seq.len() - big,
        }
    }

    pub fn total(&self) -> usize {
        self.big + self.small
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Big => self.big,
            Category::Small => self.small,
        }
    }

    /// `big - small`.
    pub fn balance(&self) -> i64 {
        self.big as i64 - self.small as i64
    }

    /// `|big - small| / total`, `0.0` when empty.
    pub fn imbalance(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.balance().unsigned_abs() as f64 / self.total() as f64
    }

    /// Share of `Big`; an empty window counts as balanced.
    pub fn big_share(&self) -> f64 {
        if self.total() == 0 {
            return 0.5;
        }
        self.big as f64 / self.total() as f64
    }
}

/// Binary Shannon entropy of the window's category distribution, in bits.
///
/// An empty window is treated as maximally uncertain (1.0).
pub fn entropy(seq: &[Category]) -> f64 {
    let p = CategoryCounts::of(seq).big_share();
    let q = 1.0 - p;
    let term = |x: f64| if x > 0.0 { -x * x.log2() } else { 0.0 };
    term(p) + term(q)
}

/// Longest run of identical categories anywhere in the window.
pub fn max_run(seq: &[Category]) -> usize {
    let mut best = 0;
    let mut run = 0;
    let mut prev = None;
    for &c in seq {
        run = if prev == Some(c) { run + 1 } else { 1 };
        best = best.max(run);
        prev = Some(c);
    }
    best
}

/// Mean and population variance of round sums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsStats {
    pub mean: f64,
    pub variance: f64,
}

pub fn totals_stats(rounds: &[Round]) -> TotalsStats {
    if rounds.is_empty() {
        return TotalsStats {
            mean: 0.0,
            variance: 0.0,
        };
    }
    let n = rounds.len() as f64;
    let mean = rounds.iter().map(|r| r.sum as f64).sum::<f64>() / n;
    let variance = rounds
        .iter()
        .map(|r| (r.sum as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    TotalsStats { mean, variance }
}
