// Domain constants shared by every crate.

/// A round whose dice sum reaches this value is `Category::Big`.
pub const BIG_SUM_THRESHOLD: u32 = 11;

/// Number of dice thrown per round.
pub const DICE_PER_ROUND: usize = 3;

/// Lowest face value.
pub const MIN_FACE: u8 = 1;

/// Highest face value.
pub const MAX_FACE: u8 = 6;

/// Lowest face counted as "high" by the dice-distribution statistics.
pub const HIGH_FACE_MIN: u8 = 4;

/// Mid-point of the 3-dice sum distribution.
pub const SUM_MIDPOINT: f64 = 10.5;

/// Token for `Category::Big` in digests and n-gram contexts.
pub const BIG_TOKEN: char = 'B';

/// Token for `Category::Small` in digests and n-gram contexts.
pub const SMALL_TOKEN: char = 'S';

/// Rationale emitted when the store holds no rounds.
pub const NO_DATA_RATIONALE: &str = "no data";
