//! # dicecast-sequence
//!
//! The single source of truth for outcomes and the structures derived from it.
//!
//! | Component | Role |
//! |-----------|------|
//! | `SequenceStore` | Ordered, id-unique, capped log of rounds |
//! | `ingest` | Normalises raw feed batches; drops malformed records |
//! | `PatternMemory` | n-gram context → following-outcome counts |
//! | `streak` | Trailing run and heuristic break probability |
//! | `markov` | First-order transition estimate |
//! | `stats` | Window statistics shared by every predictor |

pub mod ingest;
pub mod markov;
pub mod pattern_memory;
pub mod stats;
pub mod store;
pub mod streak;

pub use ingest::IngestReport;
pub use markov::MarkovEstimate;
pub use pattern_memory::{Context, OutcomeCounts, PatternMemory};
pub use store::{AppendOutcome, SequenceStore};
pub use streak::{BreakBreakdown, Streak};
