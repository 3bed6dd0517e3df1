use std::collections::HashMap;

use dicecast_core::constants::{DICE_PER_ROUND, HIGH_FACE_MIN};
use dicecast_core::models::{Category, Dice, PredictorKind};
use rand::RngCore;

use super::Vote;
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::Dice;

const P_MIN: f64 = 0.05;
const P_MAX: f64 = 0.95;
const PAIR_SUM_BIG: u8 = 7;

/// Summary of the dice faces in a trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceProfile {
    pub rolls: usize,
    pub avg_sum: f64,
    pub high_face_ratio: f64,
    /// Most recurrent face pair and how many rolls contained it.
    pub top_pair: Option<((u8, u8), usize)>,
}

impl DiceProfile {
    pub fn of<'a>(dice: impl IntoIterator<Item = &'a Dice>) -> Self {
        let mut rolls = 0usize;
        let mut sum = 0u32;
        let mut high = 0usize;
        let mut pairs: HashMap<(u8, u8), usize> = HashMap::new();
        for d in dice {
            rolls += 1;
            sum += d.sum();
            high += d.faces().iter().filter(|&&f| f >= HIGH_FACE_MIN).count();
            let mut seen = d.pairs().to_vec();
            seen.sort_unstable();
            seen.dedup();
            for pair in seen {
                *pairs.entry(pair).or_default() += 1;
            }
        }
        let top_pair = pairs
            .into_iter()
            .max_by(|(pa, na), (pb, nb)| na.cmp(nb).then(pb.cmp(pa)));
        let faces = rolls * DICE_PER_ROUND;
        Self {
            rolls,
            avg_sum: if rolls == 0 { 0.0 } else { sum as f64 / rolls as f64 },
            high_face_ratio: if faces == 0 { 0.5 } else { high as f64 / faces as f64 },
            top_pair,
        }
    }
}

/// Dice-distribution predictor; only rounds with dice values count.
pub fn evaluate(ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    let cfg = &ctx.config.predictors.dice;
    let profile = DiceProfile::of(
        ctx.round_window(cfg.window)
            .iter()
            .filter_map(|r| r.dice.as_ref()),
    );
    if profile.rolls < cfg.min_history {
        return Vote::coin_fallback(KIND, cfg.min_history, profile.rolls, rng);
    }

    let mut p_big = 0.5;
    if profile.avg_sum > cfg.high_avg {
        p_big += cfg.sum_nudge;
    } else if profile.avg_sum < cfg.low_avg {
        p_big -= cfg.sum_nudge;
    }
    if profile.high_face_ratio > cfg.high_face_ratio {
        p_big += cfg.face_nudge;
    } else if profile.high_face_ratio < cfg.low_face_ratio {
        p_big -= cfg.face_nudge;
    }
    let mut pair_note = String::new();
    if let Some(((a, b), n)) = profile.top_pair {
        if n >= cfg.pair_repeat {
            p_big += if a + b >= PAIR_SUM_BIG {
                cfg.pair_boost
            } else {
                -cfg.pair_boost
            };
            pair_note = format!(" pair={a}{b}x{n}");
        }
    }
    let p_big = p_big.clamp(P_MIN, P_MAX);

    Vote::new(
        KIND,
        Category::argmax(p_big, 1.0 - p_big),
        format!(
            "avg={:.2} high={:.2}{pair_note} p_big={p_big:.2}",
            profile.avg_sum, profile.high_face_ratio
        ),
    )
    .with_probability(p_big)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(faces: [u8; 3]) -> Dice {
        Dice::new(faces).unwrap()
    }

    #[test]
    fn profile_counts_each_pair_once_per_roll() {
        let rolls = [dice([5, 5, 5]), dice([5, 5, 1]), dice([2, 5, 5])];
        let profile = DiceProfile::of(rolls.iter());
        assert_eq!(profile.rolls, 3);
        assert_eq!(profile.top_pair, Some(((5, 5), 3)));
    }

    #[test]
    fn empty_profile_is_neutral() {
        let profile = DiceProfile::of(std::iter::empty());
        assert_eq!(profile.rolls, 0);
        assert_eq!(profile.high_face_ratio, 0.5);
        assert!(profile.top_pair.is_none());
    }
}
