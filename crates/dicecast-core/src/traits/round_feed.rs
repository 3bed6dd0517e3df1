use crate::errors::DicecastResult;
use crate::models::RawRound;

/// The ingestion collaborator: fetches a batch of raw records.
///
/// Batches may be unordered and may repeat ids already known.
pub trait IRoundFeed: Send + Sync {
    fn fetch(&self) -> DicecastResult<Vec<RawRound>>;
}
