use dicecast_core::models::{Category, PredictorKind};
use dicecast_sequence::stats;

use super::{insufficient, Vote};
use crate::context::PredictionContext;

const KIND: PredictorKind = PredictorKind::NGramWindow;

const P_MIN: f64 = 0.04;
const P_MAX: f64 = 0.96;

/// Windowed n-gram analyzer.
///
/// Softly blends the smoothed posterior of every order that has data for the
/// current tail (shortest last, so it carries the most weight), then pushes
/// away from the last outcome after a long run or heavy alternation in the
/// window. Its confidence is the pattern signal blended into the fused
/// confidence.
pub fn evaluate(ctx: &PredictionContext<'_>) -> Vote {
    let cfg = &ctx.config.predictors.ngram_window;
    if ctx.len() < cfg.min_history {
        return Vote::abstain(KIND, format!("none, {}/{} rounds", ctx.len(), cfg.min_history))
            .with_confidence(0.0)
            .with_fallback(insufficient(KIND, cfg.min_history, ctx.len()));
    }

    let mut p_big = 0.5;
    let mut used = None;
    for hit in ctx.memory.matches_longest_first(&ctx.categories) {
        p_big = cfg.blend * hit.counts.smoothed_big() + (1.0 - cfg.blend) * p_big;
        used = Some(hit);
    }

    let window = ctx.window(cfg.window);
    let Some(&last) = window.last() else {
        return Vote::abstain(KIND, "none, empty window");
    };
    let away = |p: f64, push: f64| {
        let p = match last {
            Category::Big => p - push,
            Category::Small => p + push,
        };
        p.clamp(P_MIN, P_MAX)
    };
    if stats::max_run(window) >= cfg.long_run {
        p_big = away(p_big, cfg.run_push);
    }
    if stats::switches(window) >= cfg.alternation_switches {
        p_big = away(p_big, cfg.alternation_push);
    }

    let boost = if stats::entropy(window) < cfg.entropy_threshold {
        cfg.confidence_boost
    } else {
        0.0
    };
    let confidence =
        (0.55 + (p_big - 0.5).abs() * 0.9 + boost).clamp(cfg.confidence_min, cfg.confidence_max);

    let rationale = match used {
        Some(hit) => format!(
            "{}-gram {} -> big:{}/small:{}, p_big={:.2}",
            hit.order, hit.context, hit.counts.big, hit.counts.small, p_big
        ),
        None => format!("p_big={p_big:.2}"),
    };
    Vote::new(KIND, Category::argmax(p_big, 1.0 - p_big), rationale)
        .with_probability(p_big)
        .with_confidence(confidence)
}
