mod date_key;
mod entry;
mod records;

pub use date_key::{DateKey, effective_date_key};
pub use entry::{Entry, EntryKind};
pub(crate) use entry::scan;
pub use records::{Category, EntryId, JournalEntry, NoteEntry};
