//! Streak/Break Analyzer.
//!
//! `break_probability` is a heuristic score, not a calibrated estimate:
//! a step function of streak length, plus a switch-rate term, plus a bonus
//! when the recent window is skewed, clamped to a configured band.

use dicecast_core::config::StreakConfig;
use dicecast_core::models::Category;
use serde::Serialize;

use crate::stats;

/// The maximal trailing run of identical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub len: usize,
    /// `None` only for an empty sequence.
    pub category: Option<Category>,
}

pub fn streak(seq: &[Category]) -> Streak {
    let Some(&last) = seq.last() else {
        return Streak {
            len: 0,
            category: None,
        };
    };
    let len = seq.iter().rev().take_while(|&&c| c == last).count();
    Streak {
        len,
        category: Some(last),
    }
}

/// Every term of a break-probability computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakBreakdown {
    pub streak: Streak,
    pub base: f64,
    pub switches: usize,
    pub switch_term: f64,
    pub entropy: f64,
    pub skew_bonus: f64,
    pub probability: f64,
}

/// Combine the terms for a given streak length, window switch count and
/// window entropy. Non-decreasing in `streak_len` with the others fixed.
pub fn break_probability_from(
    streak_len: usize,
    switches: usize,
    entropy: f64,
    config: &StreakConfig,
) -> f64 {
    let base = config.base_for(streak_len);
    let switch_term = switches as f64 / config.switch_divisor;
    let skew_bonus = if entropy < config.entropy_threshold {
        config.skew_bonus
    } else {
        0.0
    };
    (base + switch_term + skew_bonus).clamp(config.min, config.max)
}

pub fn break_breakdown(seq: &[Category], config: &StreakConfig) -> BreakBreakdown {
    let streak = streak(seq);
    let window = stats::tail(seq, config.window);
    let switches = stats::switches(window);
    let entropy = stats::entropy(window);
    let skew_bonus = if entropy < config.entropy_threshold {
        config.skew_bonus
    } else {
        0.0
    };
    BreakBreakdown {
        streak,
        base: config.base_for(streak.len),
        switches,
        switch_term: switches as f64 / config.switch_divisor,
        entropy,
        skew_bonus,
        probability: break_probability_from(streak.len, switches, entropy, config),
    }
}

/// Heuristic probability that the current streak ends on the next round.
pub fn break_probability(seq: &[Category], config: &StreakConfig) -> f64 {
    break_breakdown(seq, config).probability
}
