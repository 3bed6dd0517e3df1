//! Gradient-update weighting: a persistent vector nudged toward accuracy.

use dicecast_core::config::WeightingConfig;
use dicecast_core::models::{LedgerEntry, PredictorKind};

use super::performance::hit_rate;
use super::WeightVector;

const BISECTION_STEPS: usize = 100;

/// One update: `w += lr · (accuracy − 0.5)`, clamp, renormalize.
///
/// Predictors with no scored guess in `settled` keep their weight.
pub fn step(weights: &mut WeightVector, settled: &[&LedgerEntry], config: &WeightingConfig) {
    let kinds: Vec<_> = weights.kinds().collect();
    for kind in kinds {
        let (hits, total) = hit_rate(kind, settled);
        if total == 0 {
            continue;
        }
        let accuracy = hits as f64 / total as f64;
        let w = weights.get(kind) + config.learning_rate * (accuracy - 0.5);
        weights.set(kind, w.clamp(config.weight_min, config.weight_max));
    }
    bounded_normalize(weights, config.weight_min, config.weight_max);
}

/// Scale the vector to sum to 1 while keeping every weight in `[min, max]`.
///
/// Finds `λ` with `Σ clamp(λ·wᵢ, min, max) = 1` by bisection. Non-positive
/// entries enter at `min`; an all-zero vector becomes uniform. When `min` is
/// zero and the positive entries saturate below 1, the zero entries share
/// the remainder. Requires `n·min ≤ 1 ≤ n·max`.
pub fn bounded_normalize(weights: &mut WeightVector, min: f64, max: f64) {
    let n = weights.len();
    if n == 0 {
        return;
    }
    if weights.values().all(|w| w <= 0.0) {
        let equal = 1.0 / n as f64;
        for kind in weights.kinds().collect::<Vec<_>>() {
            weights.set(kind, equal);
        }
        return;
    }

    let floor = min.max(0.0);
    let base: Vec<(PredictorKind, f64)> = weights
        .iter()
        .map(|(kind, w)| (kind, if w > 0.0 { w } else { floor }))
        .collect();

    let positive: Vec<f64> = base.iter().map(|&(_, w)| w).filter(|&w| w > 0.0).collect();
    let smallest = positive.iter().copied().fold(f64::INFINITY, f64::min);

    let zeros = n - positive.len();
    let saturated = positive.len() as f64 * max;
    if saturated < 1.0 && zeros > 0 {
        let share = (1.0 - saturated) / zeros as f64;
        for (kind, w) in base {
            weights.set(kind, if w > 0.0 { max } else { share });
        }
        return;
    }

    let total_at = |lambda: f64| -> f64 {
        base.iter().map(|&(_, w)| (lambda * w).clamp(min, max)).sum()
    };
    // At `hi` every positive weight saturates at `max`.
    let (mut lo, mut hi) = (0.0, max / smallest);
    for _ in 0..BISECTION_STEPS {
        let mid = (lo + hi) / 2.0;
        if total_at(mid) < 1.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let lambda = (lo + hi) / 2.0;
    for (kind, w) in base {
        weights.set(kind, (lambda * w).clamp(min, max));
    }
}
