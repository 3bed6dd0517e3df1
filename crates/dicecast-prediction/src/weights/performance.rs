//! Performance-multiplier weighting: base weight × recent hit rate.

use dicecast_core::config::WeightingConfig;
use dicecast_core::models::{LedgerEntry, PredictorKind};

/// Hits and scored guesses of one predictor over `entries`.
/// Abstentions are not scored.
pub fn hit_rate(kind: PredictorKind, entries: &[&LedgerEntry]) -> (usize, usize) {
    entries
        .iter()
        .filter_map(|e| Some((e.record.guess_of(kind)?, e.actual?)))
        .fold((0, 0), |(hits, total), (guess, actual)| {
            (hits + usize::from(guess == actual), total + 1)
        })
}

/// `1 + (hits − total/2) / (total/2)`, clamped to the configured band.
///
/// Neutral (1.0) with fewer settled entries than required or when the
/// predictor never committed to a guess.
pub fn multiplier(kind: PredictorKind, settled: &[&LedgerEntry], config: &WeightingConfig) -> f64 {
    if settled.len() < config.multiplier_min_entries {
        return 1.0;
    }
    let (hits, total) = hit_rate(kind, settled);
    if total == 0 {
        return 1.0;
    }
    let half = total as f64 / 2.0;
    (1.0 + (hits as f64 - half) / half).clamp(config.multiplier_min, config.multiplier_max)
}
