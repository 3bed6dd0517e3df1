use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BIG_SUM_THRESHOLD, BIG_TOKEN, SMALL_TOKEN};

/// The two outcomes of a round.
///
/// `Big` is the category favoured by ties everywhere in the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Big,
    Small,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Big, Category::Small];

    /// Derive the category from a 3-dice sum (`sum >= 11` is `Big`).
    pub fn from_sum(sum: u32) -> Self {
        if sum >= BIG_SUM_THRESHOLD {
            Category::Big
        } else {
            Category::Small
        }
    }

    /// The other category.
    pub fn flip(self) -> Self {
        match self {
            Category::Big => Category::Small,
            Category::Small => Category::Big,
        }
    }

    pub fn token(self) -> char {
        match self {
            Category::Big => BIG_TOKEN,
            Category::Small => SMALL_TOKEN,
        }
    }

    pub fn from_token(token: char) -> Option<Self> {
        match token {
            BIG_TOKEN => Some(Category::Big),
            SMALL_TOKEN => Some(Category::Small),
            _ => None,
        }
    }

    /// Parse a feed-supplied result label.
    ///
    /// Accepts the English names, the single-letter tokens, and the
    /// Tài/Xỉu labels used by Sic Bo feeds, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "big" | "b" | "tài" | "tai" => Some(Category::Big),
            "small" | "s" | "xỉu" | "xiu" => Some(Category::Small),
            _ => None,
        }
    }

    /// Pick the category for a `big >= small` comparison, ties to `Big`.
    pub fn argmax(big: f64, small: f64) -> Self {
        if big >= small {
            Category::Big
        } else {
            Category::Small
        }
    }

    /// Render a sequence as a token string, e.g. `"BBSB"`.
    pub fn render(seq: &[Category]) -> String {
        seq.iter().map(|c| c.token()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Big => write!(f, "big"),
            Category::Small => write!(f, "small"),
        }
    }
}
