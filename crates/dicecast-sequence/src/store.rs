//! Sequence Store — ordered, id-unique, capped log of rounds.

use std::collections::HashSet;

use dicecast_core::config::StoreConfig;
use dicecast_core::models::{Category, Round, RoundId};
use serde::Serialize;

use crate::stats;

/// What `append` did with a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    /// The id is already stored.
    Duplicate,
    /// The id is not newer than the latest stored round.
    Stale,
}

/// Rounds in strictly increasing id order, truncated to the most recent
/// `max_history` entries.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceStore {
    rounds: Vec<Round>,
    #[serde(skip)]
    ids: HashSet<RoundId>,
    max_history: usize,
}

impl SequenceStore {
    pub fn new(max_history: usize) -> Self {
        Self {
            rounds: Vec::with_capacity(max_history.min(1024)),
            ids: HashSet::new(),
            max_history: max_history.max(1),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.max_history)
    }

    /// Append one round, then enforce the retention cap.
    ///
    /// Duplicate or out-of-order ids are rejected without touching state.
    pub fn append(&mut self, round: Round) -> AppendOutcome {
        if self.ids.contains(&round.id) {
            return AppendOutcome::Duplicate;
        }
        if self.latest().is_some_and(|last| round.id < last.id) {
            return AppendOutcome::Stale;
        }
        self.ids.insert(round.id);
        self.rounds.push(round);
        self.enforce_cap();
        AppendOutcome::Appended
    }

    /// Drop the oldest rounds beyond the cap. Returns how many were dropped.
    fn enforce_cap(&mut self) -> usize {
        let excess = self.rounds.len().saturating_sub(self.max_history);
        if excess > 0 {
            for dropped in self.rounds.drain(..excess) {
                self.ids.remove(&dropped.id);
            }
        }
        excess
    }

    /// The last `k` rounds (fewer if unavailable), oldest first.
    pub fn tail(&self, k: usize) -> &[Round] {
        stats::tail(&self.rounds, k)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Category of every stored round, oldest first.
    pub fn categories(&self) -> Vec<Category> {
        self.rounds.iter().map(|r| r.category).collect()
    }

    pub fn latest(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn contains(&self, id: RoundId) -> bool {
        self.ids.contains(&id)
    }

    pub fn get(&self, id: RoundId) -> Option<&Round> {
        self.rounds
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|i| &self.rounds[i])
    }

    /// The first stored round with an id greater than `id`.
    pub fn successor_of(&self, id: RoundId) -> Option<&Round> {
        let idx = self.rounds.partition_point(|r| r.id <= id);
        self.rounds.get(idx)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }
}
