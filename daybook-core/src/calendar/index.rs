//! Date-keyed index over journals and notes.

use crate::entry::{DateKey, Entry, JournalEntry, NoteEntry};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Entries grouped by their effective date.
///
/// Within a bucket, journals come first in collection order, then notes in
/// collection order. Buckets iterate in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateIndex<'a> {
    buckets: BTreeMap<DateKey, Vec<Entry<'a>>>,
}

impl<'a> DateIndex<'a> {
    pub fn build(journals: &'a [JournalEntry], notes: &'a [NoteEntry]) -> Self {
        let mut index = DateIndex::default();
        for journal in journals {
            index.insert(Entry::Journal(journal));
        }
        for note in notes {
            index.insert(Entry::Note(note));
        }
        index
    }

    fn insert(&mut self, entry: Entry<'a>) {
        match entry.date_key() {
            Some(key) => self.buckets.entry(key).or_default().push(entry),
            None => debug!(kind = %entry.kind(), id = entry.id(), "entry has no date, not indexed"),
        }
    }

    pub fn get(&self, key: &DateKey) -> &[Entry<'a>] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn on(&self, date: NaiveDate) -> &[Entry<'a>] {
        self.get(&DateKey::from(date))
    }

    pub fn count(&self, key: &DateKey) -> usize {
        self.get(key).len()
    }

    /// The first `n` entries of a bucket.
    pub fn preview(&self, key: &DateKey, n: usize) -> &[Entry<'a>] {
        let bucket = self.get(key);
        &bucket[..bucket.len().min(n)]
    }

    pub fn keys(&self) -> impl Iterator<Item = &DateKey> {
        self.buckets.keys()
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of indexed entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
