// Single source of truth for all default values.

// --- Store ---
pub const DEFAULT_MAX_HISTORY: usize = 400;
pub const DEFAULT_MAX_PREDICTIONS_HISTORY: usize = 200;
pub const DEFAULT_DIGEST_LEN: usize = 20;

// --- Pattern memory ---
pub const DEFAULT_PATTERN_ORDERS: [usize; 3] = [3, 4, 5];

// --- Streak / break ---
pub const DEFAULT_BREAK_WINDOW: usize = 20;
pub const DEFAULT_BREAK_STEPS: [(usize, f64); 4] = [(9, 0.78), (7, 0.60), (5, 0.45), (4, 0.35)];
pub const DEFAULT_BREAK_BASE_FLOOR: f64 = 0.25;
pub const DEFAULT_BREAK_SWITCH_DIVISOR: f64 = 50.0;
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_BREAK_SKEW_BONUS: f64 = 0.08;
pub const DEFAULT_BREAK_MIN: f64 = 0.05;
pub const DEFAULT_BREAK_MAX: f64 = 0.96;

// --- Markov ---
pub const DEFAULT_MARKOV_MIN_HISTORY: usize = 6;

// --- Predictors ---
pub const DEFAULT_TREND_WINDOW: usize = 20;
pub const DEFAULT_TREND_BASE: f64 = 1.25;
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.28;
pub const DEFAULT_TREND_MIN_HISTORY: usize = 6;

pub const DEFAULT_SHORT_PATTERN_WINDOW: usize = 10;
pub const DEFAULT_SHORT_PATTERN_LEN: usize = 4;
pub const DEFAULT_SHORT_PATTERN_MIN_OCCURRENCES: usize = 3;
pub const DEFAULT_SHORT_PATTERN_MIN_HISTORY: usize = 6;

pub const DEFAULT_MEAN_DEVIATION_WINDOW: usize = 15;
pub const DEFAULT_MEAN_DEVIATION_MIN_HISTORY: usize = 8;
pub const DEFAULT_MEAN_DEVIATION_THRESHOLD: f64 = 0.25;

pub const DEFAULT_SWITCH_WINDOW: usize = 12;
pub const DEFAULT_SWITCH_MIN_HISTORY: usize = 6;
pub const DEFAULT_SWITCH_THRESHOLD: usize = 7;

pub const DEFAULT_NGRAM_MIN_HISTORY: usize = 8;
pub const DEFAULT_NGRAM_BASE_STRENGTH: f64 = 0.25;
pub const DEFAULT_NGRAM_STRENGTH_SCALE: f64 = 0.25;

pub const DEFAULT_NGRAM_WINDOW_LEN: usize = 15;
pub const DEFAULT_NGRAM_WINDOW_MIN_HISTORY: usize = 16;
pub const DEFAULT_NGRAM_WINDOW_BLEND: f64 = 0.6;
pub const DEFAULT_NGRAM_WINDOW_LONG_RUN: usize = 6;
pub const DEFAULT_NGRAM_WINDOW_RUN_PUSH: f64 = 0.10;
pub const DEFAULT_NGRAM_WINDOW_ALTERNATION_SWITCHES: usize = 11;
pub const DEFAULT_NGRAM_WINDOW_ALTERNATION_PUSH: f64 = 0.08;
pub const DEFAULT_NGRAM_WINDOW_CONFIDENCE_BOOST: f64 = 0.08;
pub const DEFAULT_NGRAM_WINDOW_CONFIDENCE_MIN: f64 = 0.52;
pub const DEFAULT_NGRAM_WINDOW_CONFIDENCE_MAX: f64 = 0.96;

pub const DEFAULT_STREAK_BREAK_MIN_HISTORY: usize = 7;
pub const DEFAULT_STREAK_BREAK_TOTALS_WINDOW: usize = 14;
pub const DEFAULT_STREAK_BREAK_STAIR_WINDOW: usize = 8;
pub const DEFAULT_STREAK_BREAK_VARIANCE_THRESHOLD: f64 = 9.0;
pub const DEFAULT_STREAK_BREAK_DECISION_THRESHOLD: f64 = 0.58;

pub const DEFAULT_DICE_WINDOW: usize = 10;
pub const DEFAULT_DICE_MIN_HISTORY: usize = 5;
pub const DEFAULT_DICE_HIGH_AVG: f64 = 11.5;
pub const DEFAULT_DICE_LOW_AVG: f64 = 9.5;
pub const DEFAULT_DICE_SUM_NUDGE: f64 = 0.10;
pub const DEFAULT_DICE_HIGH_FACE_RATIO: f64 = 0.6;
pub const DEFAULT_DICE_LOW_FACE_RATIO: f64 = 0.4;
pub const DEFAULT_DICE_FACE_NUDGE: f64 = 0.05;
pub const DEFAULT_DICE_PAIR_REPEAT: usize = 3;
pub const DEFAULT_DICE_PAIR_BOOST: f64 = 0.05;

// --- Fusion ---
pub const DEFAULT_MOMENTUM_WINDOW: usize = 5;
pub const DEFAULT_MOMENTUM_MARGIN: i64 = 1;
pub const DEFAULT_MOMENTUM_NUDGE: f64 = 0.08;
pub const DEFAULT_BAD_PATTERN_WINDOW: usize = 20;
pub const DEFAULT_BAD_PATTERN_SWITCHES: usize = 12;
pub const DEFAULT_BAD_PATTERN_STREAK: usize = 11;
pub const DEFAULT_BAD_PATTERN_DAMPENING: f64 = 0.82;
pub const DEFAULT_SKEW_WINDOW: usize = 15;
pub const DEFAULT_SKEW_COUNT: usize = 10;
pub const DEFAULT_SKEW_NUDGE: f64 = 0.12;
pub const DEFAULT_CONFIDENCE_BASE: f64 = 0.55;
pub const DEFAULT_MARGIN_CAP: f64 = 0.9;
pub const DEFAULT_SIGNAL_BLEND: f64 = 0.4;
pub const DEFAULT_SIGNAL_FALLBACK: f64 = 0.55;
pub const DEFAULT_REVERSAL_SCALE: f64 = 0.05;
pub const DEFAULT_CONFIDENCE_MIN: f64 = 0.52;
pub const DEFAULT_CONFIDENCE_MAX: f64 = 0.98;

// --- Weighting ---
pub const DEFAULT_WEIGHT_LOOKBACK: usize = 18;
pub const DEFAULT_MULTIPLIER_MIN_ENTRIES: usize = 3;
pub const DEFAULT_MULTIPLIER_MIN: f64 = 0.6;
pub const DEFAULT_MULTIPLIER_MAX: f64 = 1.6;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_WEIGHT_MIN: f64 = 0.02;
pub const DEFAULT_WEIGHT_MAX: f64 = 0.40;
pub const DEFAULT_GRADIENT_MIN_ENTRIES: usize = 10;
/// One update per full lookback window of newly settled forecasts.
pub const DEFAULT_GRADIENT_UPDATE_INTERVAL: usize = DEFAULT_WEIGHT_LOOKBACK;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_ENV: &str = "DICECAST_LOG";
pub const DEFAULT_JSON_LOGS: bool = false;
