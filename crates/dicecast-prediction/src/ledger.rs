//! Prediction Ledger: bounded, round-keyed history of forecasts and outcomes.

use std::collections::VecDeque;

use dicecast_core::config::StoreConfig;
use dicecast_core::models::{LedgerEntry, RoundId, Verdict};
use dicecast_sequence::SequenceStore;
use serde::Serialize;
use tracing::debug;

use crate::r2;

/// Hit rate of the fused call over settled entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracySummary {
    pub settled: usize,
    pub correct: usize,
    /// `correct / settled`, `None` until something has settled.
    pub accuracy: Option<f64>,
}

/// Append-only (modulo the retention cap) record of forecasts.
///
/// At most one entry per basis round; entries are ordered by round id
/// because basis rounds only move forward.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionLedger {
    entries: VecDeque<LedgerEntry>,
    cap: usize,
    /// Entries settled over the ledger's lifetime, including evicted ones.
    settled_total: u64,
}

impl PredictionLedger {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap,
            settled_total: 0,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.max_predictions_history)
    }

    /// Append an entry unless its basis round is already recorded.
    /// Returns `false` for a duplicate.
    pub fn record(&mut self, entry: LedgerEntry) -> bool {
        if self.get(entry.round_id).is_some() {
            debug!(round_id = entry.round_id, "ledger entry already recorded");
            return false;
        }
        self.entries.push_back(entry);
        while self.entries.len() > self.cap {
            self.entries.pop_front();
        }
        true
    }

    /// Settle every open entry whose successor round is now stored.
    /// Returns how many entries settled.
    pub fn settle(&mut self, store: &SequenceStore) -> usize {
        let mut newly = 0;
        for entry in self.entries.iter_mut().filter(|e| !e.is_settled()) {
            if let Some(next) = store.successor_of(entry.round_id) {
                entry.settle(next.category);
                newly += 1;
            }
        }
        self.settled_total += newly as u64;
        newly
    }

    pub fn get(&self, round_id: RoundId) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.round_id == round_id)
    }

    pub fn latest(&self) -> Option<&LedgerEntry> {
        self.entries.back()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    pub fn settled(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter().filter(|e| e.is_settled())
    }

    /// The last `n` settled entries, oldest first.
    pub fn recent_settled(&self, n: usize) -> Vec<&LedgerEntry> {
        let mut recent: Vec<_> = self.entries.iter().rev().filter(|e| e.is_settled()).take(n).collect();
        recent.reverse();
        recent
    }

    pub fn settled_count(&self) -> usize {
        self.settled().count()
    }

    pub fn settled_total(&self) -> u64 {
        self.settled_total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn accuracy(&self) -> AccuracySummary {
        let (settled, correct) = self.settled().fold((0, 0), |(s, c), e| {
            (s + 1, c + usize::from(e.verdict == Some(Verdict::Correct)))
        });
        AccuracySummary {
            settled,
            correct,
            accuracy: (settled > 0).then(|| r2(correct as f64 / settled as f64)),
        }
    }

    pub fn snapshot(&self) -> Vec<LedgerEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicecast_core::models::{Category, PredictionRecord};
    use std::collections::BTreeMap;
    use test_fixtures::rounds_from_tokens;

    fn entry(round_id: RoundId, call: Category) -> LedgerEntry {
        let record = PredictionRecord {
            guesses: BTreeMap::new(),
            final_call: call,
        };
        LedgerEntry::new(round_id, record, 0.6)
    }

    #[test]
    fn record_dedups_by_round() {
        let mut ledger = PredictionLedger::new(10);
        assert!(ledger.record(entry(5, Category::Big)));
        assert!(!ledger.record(entry(5, Category::Small)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.latest().unwrap().predicted, Category::Big);
    }

    #[test]
    fn cap_evicts_oldest() {
        let mut ledger = PredictionLedger::new(2);
        for id in 1..=3 {
            ledger.record(entry(id, Category::Big));
        }
        let ids: Vec<_> = ledger.entries().map(|e| e.round_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn settles_against_successor_only() {
        let mut store = SequenceStore::new(50);
        for r in rounds_from_tokens("BS", 1) {
            store.append(r);
        }
        let mut ledger = PredictionLedger::new(10);
        ledger.record(entry(1, Category::Small));
        ledger.record(entry(2, Category::Big));

        assert_eq!(ledger.settle(&store), 1);
        assert_eq!(ledger.get(1).unwrap().verdict, Some(Verdict::Correct));
        assert!(!ledger.get(2).unwrap().is_settled());

        let summary = ledger.accuracy();
        assert_eq!(summary.settled, 1);
        assert_eq!(summary.accuracy, Some(1.0));
    }
}
