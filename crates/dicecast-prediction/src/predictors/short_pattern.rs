use dicecast_core::models::{Category, PredictorKind};
use rand::RngCore;

use super::{flip_last, Vote};
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::ShortPattern;

/// Most frequent fixed-length subsequence of a trailing window.
///
/// If it occurs often enough and its prefix matches the current tail, its
/// final element is the guess. Otherwise: flip of last outcome.
pub fn evaluate(ctx: &PredictionContext<'_>, rng: &mut dyn RngCore) -> Vote {
    let cfg = &ctx.config.predictors.short_pattern;
    if ctx.len() < cfg.min_history {
        return Vote::coin_fallback(KIND, cfg.min_history, ctx.len(), rng);
    }

    let window = ctx.window(cfg.window);
    let prefix_len = cfg.pattern_len - 1;
    if let Some((pattern, count)) = most_frequent(window, cfg.pattern_len) {
        let tail = &window[window.len() - prefix_len..];
        if count >= cfg.min_occurrences && pattern[..prefix_len] == *tail {
            let next = pattern[prefix_len];
            return Vote::new(
                KIND,
                next,
                format!("pattern {} x{count} continues", Category::render(pattern)),
            );
        }
    }
    Vote::new(KIND, flip_last(ctx), "no dominant pattern, flip last")
}

/// The most frequent length-`len` subsequence and its count.
/// Ties go to the pattern seen first.
pub fn most_frequent(window: &[Category], len: usize) -> Option<(&[Category], usize)> {
    let mut seen: Vec<(&[Category], usize)> = Vec::new();
    for w in window.windows(len) {
        match seen.iter_mut().find(|(p, _)| *p == w) {
            Some((_, n)) => *n += 1,
            None => seen.push((w, 1)),
        }
    }
    seen.into_iter()
        .fold(None, |best: Option<(&[Category], usize)>, cur| match best {
            Some(b) if b.1 >= cur.1 => Some(b),
            _ => Some(cur),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicecast_core::models::Category::{Big as B, Small as S};

    #[test]
    fn counts_overlapping_windows() {
        let w = [B, S, B, S, B, S];
        let (p, n) = most_frequent(&w, 4).unwrap();
        assert_eq!(p, &[B, S, B, S]);
        assert_eq!(n, 2);
    }

    #[test]
    fn ties_prefer_first_seen() {
        let w = [B, B, S, S];
        let (p, n) = most_frequent(&w, 2).unwrap();
        assert_eq!(p, &[B, B]);
        assert_eq!(n, 1);
    }

    #[test]
    fn short_window_has_no_pattern() {
        assert!(most_frequent(&[B, S], 4).is_none());
    }
}
