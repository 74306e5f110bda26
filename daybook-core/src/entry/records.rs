use serde::{Deserialize, Serialize};

pub type EntryId = i64;

/// A category attached to a journal entry or a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<EntryId>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A journal entry as delivered by the data source.
///
/// `content` is rich-text markup. `date` is an explicit calendar date
/// (`YYYY-MM-DD`), although anything after the first 10 characters is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// A quick note. `content` is plain text and `created_at` a timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub is_pinned: bool,
}
