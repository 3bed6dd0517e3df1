use dicecast_core::errors::IngestError;
use dicecast_core::models::Category;
use dicecast_sequence::{AppendOutcome, SequenceStore};
use test_fixtures::{malformed_record, raw_batch, raw_from_tokens, round, rounds_from_tokens};

#[test]
fn append_rejects_duplicate_ids() {
    let mut store = SequenceStore::new(10);
    assert_eq!(store.append(round(1, Category::Big)), AppendOutcome::Appended);
    assert_eq!(store.append(round(1, Category::Small)), AppendOutcome::Duplicate);
    assert_eq!(store.len(), 1);
    assert_eq!(store.latest().unwrap().category, Category::Big);
}

#[test]
fn append_rejects_ids_older_than_latest() {
    let mut store = SequenceStore::new(10);
    store.append(round(5, Category::Big));
    assert_eq!(store.append(round(3, Category::Small)), AppendOutcome::Stale);
    assert_eq!(store.len(), 1);
}

#[test]
fn retention_cap_drops_oldest_first() {
    let mut store = SequenceStore::new(4);
    for r in rounds_from_tokens("BBSSBS", 1) {
        store.append(r);
    }
    assert_eq!(store.len(), 4);
    let ids: Vec<u64> = store.rounds().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4, 5, 6]);
    assert!(!store.contains(1));
    assert_eq!(store.tail(4), store.rounds());
}

#[test]
fn tail_returns_fewer_when_short() {
    let mut store = SequenceStore::new(10);
    for r in rounds_from_tokens("BSB", 1) {
        store.append(r);
    }
    assert_eq!(store.tail(2).len(), 2);
    assert_eq!(store.tail(2)[0].id, 2);
    assert_eq!(store.tail(50).len(), 3);
}

#[test]
fn successor_skips_gaps() {
    let mut store = SequenceStore::new(10);
    store.append(round(10, Category::Big));
    store.append(round(12, Category::Small));
    assert_eq!(store.successor_of(10).unwrap().id, 12);
    assert_eq!(store.successor_of(11).unwrap().id, 12);
    assert!(store.successor_of(12).is_none());
    assert!(store.get(11).is_none());
}

#[test]
fn ingest_sorts_and_dedupes_unordered_batch() {
    let mut store = SequenceStore::new(100);
    let mut batch = raw_from_tokens("BBSSB", 1);
    batch.reverse();
    batch.push(batch[0].clone());
    let report = store.ingest(&batch);
    assert_eq!(report.accepted, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.duplicates, 1);
    assert_eq!(store.categories(), test_fixtures::seq("BBSSB"));
}

#[test]
fn ingest_skips_known_ids() {
    let mut store = SequenceStore::new(100);
    store.ingest(&raw_from_tokens("BBS", 1));
    let report = store.ingest(&raw_from_tokens("BBSSB", 1));
    assert_eq!(report.accepted, vec![4, 5]);
    assert_eq!(report.duplicates, 3);
    assert_eq!(store.len(), 5);
}

#[test]
fn malformed_record_is_dropped_not_fatal() {
    let mut store = SequenceStore::new(100);
    let mut batch = raw_from_tokens("BS", 1);
    batch.insert(1, malformed_record());
    let report = store.ingest(&batch);
    assert_eq!(report.accepted, vec![1, 2]);
    assert_eq!(report.rejected.len(), 1);
    assert!(matches!(
        report.rejected[0],
        IngestError::MalformedRound { index: 1, .. }
    ));
}

#[test]
fn empty_batch_leaves_store_untouched() {
    let mut store = SequenceStore::new(100);
    store.ingest(&raw_batch(&rounds_from_tokens("BSB", 1)));
    let before = store.rounds().to_vec();
    let report = store.ingest(&[]);
    assert!(!report.changed());
    assert_eq!(store.rounds(), before.as_slice());
}
