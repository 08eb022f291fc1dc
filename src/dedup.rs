//! Deduplication of records accumulated across overlapping queries.

use std::collections::HashSet;

use crate::models::Record;

/// Collapse the accumulated multiset to one record per arXiv ID.
///
/// Stable first-wins: the first-encountered record for an ID is retained in
/// its original position and later duplicates are discarded wholesale (no
/// field merging).
pub fn deduplicate_records(records: Vec<Record>) -> Vec<Record> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.id.clone()))
        .collect()
}
