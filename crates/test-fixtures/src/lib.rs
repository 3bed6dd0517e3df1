//! Deterministic round sequences shared by the integration tests.
//!
//! Sequences are written as token strings: `B` for big, `S` for small.

use dicecast_core::models::{Category, Dice, RawRound, Round, RoundId};
use serde_json::json;

/// Faces used for a big round (sum 12).
pub const BIG_FACES: [u8; 3] = [4, 4, 4];
/// Faces used for a small round (sum 9).
pub const SMALL_FACES: [u8; 3] = [3, 3, 3];

/// Parse a token string. Whitespace is ignored.
///
/// # Panics
/// On any token other than `B`, `S` or whitespace.
pub fn seq(tokens: &str) -> Vec<Category> {
    tokens
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Category::from_token(c).unwrap_or_else(|| panic!("bad token {c:?}")))
        .collect()
}

/// `n` alternating categories starting with `first`.
pub fn alternating(n: usize, first: Category) -> Vec<Category> {
    (0..n)
        .map(|i| if i % 2 == 0 { first } else { first.flip() })
        .collect()
}

pub fn faces_for(category: Category) -> [u8; 3] {
    match category {
        Category::Big => BIG_FACES,
        Category::Small => SMALL_FACES,
    }
}

/// A round with canonical dice for its category.
pub fn round(id: RoundId, category: Category) -> Round {
    Round::from_dice(id, dice(faces_for(category)))
}

/// A round with explicit faces.
pub fn dice_round(id: RoundId, faces: [u8; 3]) -> Round {
    Round::from_dice(id, dice(faces))
}

/// # Panics
/// When a face lies outside `[1, 6]`.
pub fn dice(faces: [u8; 3]) -> Dice {
    Dice::new(faces).unwrap_or_else(|| panic!("invalid faces {faces:?}"))
}

/// Rounds with consecutive ids starting at `start_id`.
pub fn rounds_from_tokens(tokens: &str, start_id: RoundId) -> Vec<Round> {
    seq(tokens)
        .into_iter()
        .zip(start_id..)
        .map(|(c, id)| round(id, c))
        .collect()
}

pub fn rounds_from_categories(categories: &[Category], start_id: RoundId) -> Vec<Round> {
    categories
        .iter()
        .zip(start_id..)
        .map(|(&c, id)| round(id, c))
        .collect()
}

/// Raw feed records, as the upstream feed names its fields.
pub fn raw_batch(rounds: &[Round]) -> Vec<RawRound> {
    rounds.iter().map(feed_record).collect()
}

pub fn raw_from_tokens(tokens: &str, start_id: RoundId) -> Vec<RawRound> {
    raw_batch(&rounds_from_tokens(tokens, start_id))
}

fn feed_record(round: &Round) -> RawRound {
    let value = json!({
        "session": round.id,
        "dice": round.dice.map(|d| d.faces().to_vec()),
        "total": round.sum,
        "result": round.category.to_string(),
    });
    serde_json::from_value(value).unwrap_or_else(|e| panic!("fixture record: {e}"))
}

/// A record missing its id.
pub fn malformed_record() -> RawRound {
    serde_json::from_value(json!({ "dice": [1, 2, 3], "total": 6 }))
        .unwrap_or_else(|e| panic!("fixture record: {e}"))
}
