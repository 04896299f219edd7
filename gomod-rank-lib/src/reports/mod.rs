//! Aggregation and rendering of resolved repository records
//!
//! The report stage drains the record queue completely before doing anything else,
//! because ordering can only be established once every record has arrived. Records
//! are then stable-sorted by the active [`SortKey`] (ascending, ties kept in arrival
//! order) and rendered as a table with one header row.

mod sort_key;
mod table;

pub use sort_key::SortKey;
pub use table::{HEADER, generate as generate_table};

use crate::hosting::RepositoryRecord;
use tokio::sync::mpsc::Receiver;

/// Collect every record from `records` until the queue closes, then sort them by `sort_key`.
pub async fn collect_sorted(mut records: Receiver<RepositoryRecord>, sort_key: SortKey) -> Vec<RepositoryRecord> {
    let mut collected = Vec::new();
    while let Some(record) = records.recv().await {
        collected.push(record);
    }

    sort_records(&mut collected, sort_key);
    collected
}

/// Stable ascending sort by the value `sort_key` selects.
pub fn sort_records(records: &mut [RepositoryRecord], sort_key: SortKey) {
    records.sort_by_key(|record| sort_key.value_of(record));
}
