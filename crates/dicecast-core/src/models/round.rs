use serde::{Deserialize, Serialize};

use crate::constants::{DICE_PER_ROUND, MAX_FACE, MIN_FACE};
use crate::models::Category;

/// Sequential round identifier assigned by the game feed.
pub type RoundId = u64;

/// Three validated face values in `[1, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice([u8; DICE_PER_ROUND]);

impl Dice {
    /// Returns `None` when any face lies outside `[1, 6]`.
    pub fn new(faces: [u8; DICE_PER_ROUND]) -> Option<Self> {
        faces
            .iter()
            .all(|f| (MIN_FACE..=MAX_FACE).contains(f))
            .then_some(Self(faces))
    }

    pub fn faces(&self) -> [u8; DICE_PER_ROUND] {
        self.0
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&f| f as u32).sum()
    }

    /// The three unordered face pairs of this roll, each sorted ascending.
    pub fn pairs(&self) -> [(u8, u8); 3] {
        let [a, b, c] = self.0;
        let ordered = |x: u8, y: u8| (x.min(y), x.max(y));
        [ordered(a, b), ordered(a, c), ordered(b, c)]
    }
}

/// One completed round. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    /// Raw faces, when the feed supplied them.
    pub dice: Option<Dice>,
    pub sum: u32,
    pub category: Category,
}

impl Round {
    /// Build a round from its dice; sum and category are derived.
    pub fn from_dice(id: RoundId, dice: Dice) -> Self {
        let sum = dice.sum();
        Self {
            id,
            dice: Some(dice),
            sum,
            category: Category::from_sum(sum),
        }
    }

    /// Build a round where the category may be supplied authoritatively.
    pub fn new(id: RoundId, dice: Option<Dice>, sum: u32, category: Option<Category>) -> Self {
        Self {
            id,
            dice,
            sum,
            category: category.unwrap_or_else(|| Category::from_sum(sum)),
        }
    }
}

/// A loosely-typed record as delivered by the ingestion collaborator.
///
/// Field names follow the upstream feed (`session`, `total`, `result`)
/// with aliases for the normalised names. Values are kept as JSON so that
/// numeric strings and missing fields can be judged during normalisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRound {
    #[serde(default, alias = "session")]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub dice: Option<serde_json::Value>,
    #[serde(default, alias = "total")]
    pub sum: Option<serde_json::Value>,
    #[serde(default, alias = "result")]
    pub category: Option<serde_json::Value>,
}

impl RawRound {
    /// Convenience constructor for a well-formed record.
    pub fn from_round(round: &Round) -> Self {
        Self {
            id: Some(round.id.into()),
            dice: round
                .dice
                .map(|d| serde_json::Value::from(d.faces().to_vec())),
            sum: Some(round.sum.into()),
            category: Some(round.category.to_string().into()),
        }
    }
}
