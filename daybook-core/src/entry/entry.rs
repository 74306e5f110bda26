use super::date_key::{DateKey, effective_date_key};
use super::records::{Category, EntryId, JournalEntry, NoteEntry};
use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    Journal,
    Note,
}

/// A borrowed view over either record type.
///
/// Every consumer that needs to treat journals and notes uniformly goes
/// through this enum, so adding a variant forces each of them to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Journal(&'a JournalEntry),
    Note(&'a NoteEntry),
}

impl<'a> Entry<'a> {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Journal(_) => EntryKind::Journal,
            Entry::Note(_) => EntryKind::Note,
        }
    }

    pub fn id(&self) -> EntryId {
        match self {
            Entry::Journal(j) => j.id,
            Entry::Note(n) => n.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            Entry::Journal(j) => &j.title,
            Entry::Note(n) => &n.title,
        }
    }

    pub fn content(&self) -> &'a str {
        match self {
            Entry::Journal(j) => &j.content,
            Entry::Note(n) => &n.content,
        }
    }

    pub fn category(&self) -> Option<&'a Category> {
        match self {
            Entry::Journal(j) => j.category.as_ref(),
            Entry::Note(n) => n.category.as_ref(),
        }
    }

    /// The raw, untruncated date field of the underlying record.
    pub fn raw_date(&self) -> Option<&'a str> {
        match self {
            Entry::Journal(j) => j.date.as_deref(),
            Entry::Note(n) => n.created_at.as_deref(),
        }
    }

    pub fn date_key(&self) -> Option<DateKey> {
        effective_date_key(self.raw_date())
    }
}

impl<'a> From<&'a JournalEntry> for Entry<'a> {
    fn from(value: &'a JournalEntry) -> Self {
        Entry::Journal(value)
    }
}

impl<'a> From<&'a NoteEntry> for Entry<'a> {
    fn from(value: &'a NoteEntry) -> Self {
        Entry::Note(value)
    }
}

/// Journals first, then notes, each in collection order.
pub(crate) fn scan<'a>(
    journals: &'a [JournalEntry],
    notes: &'a [NoteEntry],
) -> impl Iterator<Item = Entry<'a>> {
    journals
        .iter()
        .map(Entry::from)
        .chain(notes.iter().map(Entry::from))
}
