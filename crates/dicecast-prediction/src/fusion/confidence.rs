use dicecast_core::config::FusionConfig;

use crate::r2;

/// Fused confidence.
///
/// `base + min(margin, cap)`, blended with the pattern signal, plus a
/// break-probability bonus when the call reverses the last outcome,
/// clamped to the configured band and rounded to two decimals.
pub fn fused_confidence(
    margin: f64,
    signal: f64,
    reverses_last: bool,
    break_probability: f64,
    config: &FusionConfig,
) -> f64 {
    let raw = config.confidence_base + margin.clamp(0.0, config.margin_cap);
    let mut conf = (1.0 - config.signal_blend) * raw + config.signal_blend * signal;
    if reverses_last {
        conf += break_probability * config.reversal_scale;
    }
    r2(conf.clamp(config.confidence_min, config.confidence_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_band() {
        let config = FusionConfig::default();
        assert_eq!(fused_confidence(0.0, 0.0, false, 0.0, &config), 0.52);
        assert_eq!(fused_confidence(5.0, 1.0, true, 1.0, &config), 0.98);
    }

    #[test]
    fn reversal_adds_break_bonus() {
        let config = FusionConfig::default();
        let hold = fused_confidence(0.2, 0.6, false, 0.8, &config);
        let flip = fused_confidence(0.2, 0.6, true, 0.8, &config);
        assert!((flip - hold - 0.04).abs() < 0.011);
    }
}
