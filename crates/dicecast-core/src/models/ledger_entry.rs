use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, PredictorKind, RoundId};

/// What each predictor said for one basis round, plus the fused call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// `None` means the predictor abstained.
    pub guesses: BTreeMap<PredictorKind, Option<Category>>,
    pub final_call: Category,
}

impl PredictionRecord {
    pub fn guess_of(&self, kind: PredictorKind) -> Option<Category> {
        self.guesses.get(&kind).copied().flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn of(predicted: Category, actual: Category) -> Self {
        if predicted == actual {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// One forecast and, once known, its outcome.
///
/// `round_id` is the basis round: the latest round stored when the
/// forecast was made. The outcome is the category of the next stored round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub round_id: RoundId,
    pub record: PredictionRecord,
    pub predicted: Category,
    pub confidence: f64,
    pub actual: Option<Category>,
    pub verdict: Option<Verdict>,
    pub recorded_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(round_id: RoundId, record: PredictionRecord, confidence: f64) -> Self {
        Self {
            round_id,
            predicted: record.final_call,
            record,
            confidence,
            actual: None,
            verdict: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.actual.is_some()
    }

    /// Record the observed outcome. Settling twice keeps the first outcome.
    pub fn settle(&mut self, actual: Category) {
        if self.actual.is_none() {
            self.actual = Some(actual);
            self.verdict = Some(Verdict::of(self.predicted, actual));
        }
    }
}
