//! Normalisation of raw feed batches into rounds.
//!
//! Batches arrive unordered and may repeat known ids. Each record is
//! validated on its own; a malformed record is dropped without failing the
//! batch. Survivors are sorted by id before they reach the store.

use dicecast_core::errors::IngestError;
use dicecast_core::models::{Category, Dice, RawRound, Round, RoundId};
use serde_json::Value;
use tracing::{debug, warn};

use crate::store::{AppendOutcome, SequenceStore};

const MIN_SUM: u32 = 3;
const MAX_SUM: u32 = 18;

/// Outcome of ingesting one batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Ids appended to the store, ascending.
    pub accepted: Vec<RoundId>,
    /// Records whose id was already stored or repeated within the batch.
    pub duplicates: usize,
    /// Records older than the latest stored round.
    pub stale: usize,
    /// Records dropped as malformed.
    pub rejected: Vec<IngestError>,
}

impl IngestReport {
    pub fn changed(&self) -> bool {
        !self.accepted.is_empty()
    }
}

/// Validate one raw record. `index` is its position in the batch.
pub fn normalize(raw: &RawRound, index: usize) -> Result<Round, IngestError> {
    let malformed = |reason: &str| IngestError::MalformedRound {
        index,
        reason: reason.to_string(),
    };

    let id = raw
        .id
        .as_ref()
        .ok_or_else(|| malformed("missing id"))
        .and_then(|v| as_u64(v).ok_or_else(|| malformed("id is not a non-negative integer")))?;

    let dice = match raw.dice.as_ref().filter(|v| !v.is_null()) {
        None => None,
        Some(v) => Some(parse_dice(v).ok_or_else(|| malformed("dice must be three faces in 1..=6"))?),
    };

    let sum = match (raw.sum.as_ref().filter(|v| !v.is_null()), dice) {
        (Some(v), dice) => {
            let sum = as_u64(v)
                .and_then(|s| u32::try_from(s).ok())
                .ok_or_else(|| malformed("sum is not an integer"))?;
            if let Some(d) = dice {
                if d.sum() != sum {
                    return Err(malformed("sum disagrees with dice"));
                }
            }
            sum
        }
        (None, Some(d)) => d.sum(),
        (None, None) => return Err(malformed("missing sum and dice")),
    };
    if !(MIN_SUM..=MAX_SUM).contains(&sum) {
        return Err(malformed("sum outside 3..=18"));
    }

    // An unrecognised label falls back to the derived category.
    let category = raw
        .category
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Category::from_label);

    Ok(Round::new(id, dice, sum, category))
}

/// Normalise a batch: drop malformed records, sort by id, and collapse
/// repeated ids (first occurrence wins).
pub fn normalize_batch(batch: &[RawRound]) -> (Vec<Round>, Vec<IngestError>, usize) {
    let mut rounds = Vec::with_capacity(batch.len());
    let mut rejected = Vec::new();
    for (index, raw) in batch.iter().enumerate() {
        match normalize(raw, index) {
            Ok(round) => rounds.push(round),
            Err(e) => rejected.push(e),
        }
    }
    // Stable sort keeps the first occurrence of each id in front.
    rounds.sort_by_key(|r| r.id);
    let before = rounds.len();
    rounds.dedup_by_key(|r| r.id);
    let repeated = before - rounds.len();
    (rounds, rejected, repeated)
}

impl SequenceStore {
    /// Ingest a raw batch. Existing rounds are never modified.
    pub fn ingest(&mut self, batch: &[RawRound]) -> IngestReport {
        let (rounds, rejected, repeated) = normalize_batch(batch);
        let mut report = IngestReport {
            duplicates: repeated,
            rejected,
            ..Default::default()
        };

        for round in rounds {
            let id = round.id;
            match self.append(round) {
                AppendOutcome::Appended => report.accepted.push(id),
                AppendOutcome::Duplicate => report.duplicates += 1,
                AppendOutcome::Stale => report.stale += 1,
            }
        }

        for e in &report.rejected {
            warn!(error = %e, "dropping malformed round");
        }
        debug!(
            accepted = report.accepted.len(),
            duplicates = report.duplicates,
            stale = report.stale,
            rejected = report.rejected.len(),
            stored = self.len(),
            "ingested batch"
        );
        report
    }
}

fn as_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_dice(v: &Value) -> Option<Dice> {
    let faces = v.as_array()?;
    if faces.len() != 3 {
        return None;
    }
    let mut out = [0u8; 3];
    for (slot, face) in out.iter_mut().zip(faces) {
        *slot = as_u64(face).and_then(|f| u8::try_from(f).ok())?;
    }
    Dice::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRound {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_feed_field_names() {
        let r = normalize(
            &raw(json!({"session": 12, "dice": [6, 5, 1], "total": 12, "result": "Tài"})),
            0,
        )
        .unwrap();
        assert_eq!(r.id, 12);
        assert_eq!(r.sum, 12);
        assert_eq!(r.category, Category::Big);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let r = normalize(&raw(json!({"id": "7", "sum": "9"})), 0).unwrap();
        assert_eq!(r.id, 7);
        assert_eq!(r.category, Category::Small);
        assert!(r.dice.is_none());
    }

    #[test]
    fn derives_sum_from_dice() {
        let r = normalize(&raw(json!({"id": 1, "dice": [1, 2, 3]})), 0).unwrap();
        assert_eq!(r.sum, 6);
        assert_eq!(r.category, Category::Small);
    }

    #[test]
    fn authoritative_category_wins_over_sum() {
        let r = normalize(&raw(json!({"id": 1, "sum": 12, "result": "small"})), 0).unwrap();
        assert_eq!(r.category, Category::Small);
    }

    #[test]
    fn unknown_label_falls_back_to_sum() {
        let r = normalize(&raw(json!({"id": 1, "sum": 4, "result": "???"})), 0).unwrap();
        assert_eq!(r.category, Category::Small);
    }

    #[test]
    fn rejects_missing_id() {
        let err = normalize(&raw(json!({"sum": 10})), 3).unwrap_err();
        assert!(matches!(err, IngestError::MalformedRound { index: 3, .. }));
    }

    #[test]
    fn rejects_bad_dice_and_missing_totals() {
        assert!(normalize(&raw(json!({"id": 1, "dice": [0, 2, 3]})), 0).is_err());
        assert!(normalize(&raw(json!({"id": 1, "dice": [1, 2]})), 0).is_err());
        assert!(normalize(&raw(json!({"id": 1})), 0).is_err());
        assert!(normalize(&raw(json!({"id": 1, "dice": [1, 2, 3], "sum": 7})), 0).is_err());
    }
}
