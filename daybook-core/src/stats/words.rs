use crate::entry::{Entry, EntryKind, JournalEntry, NoteEntry, scan};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestEntry {
    pub title: String,
    pub word_count: usize,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordStats {
    pub total_words: usize,
    pub average_words_per_entry: usize,
    pub longest_entry: Option<LongestEntry>,
}

impl WordStats {
    /// Word totals over journals then notes.
    ///
    /// The average is rounded to the nearest integer and is zero when both
    /// collections are empty. The longest entry is the first one reaching the
    /// maximum, so journals win ties against notes.
    pub fn aggregate(journals: &[JournalEntry], notes: &[NoteEntry]) -> Self {
        let mut stats = WordStats::default();
        let mut entries = 0usize;

        for entry in scan(journals, notes) {
            let words = entry_words(&entry);
            entries += 1;
            stats.total_words += words;

            let longer = stats
                .longest_entry
                .as_ref()
                .is_none_or(|longest| words > longest.word_count);
            if longer {
                stats.longest_entry = Some(LongestEntry {
                    title: entry.title().to_string(),
                    word_count: words,
                    kind: entry.kind(),
                });
            }
        }

        if entries > 0 {
            stats.average_words_per_entry = (stats.total_words as f64 / entries as f64).round() as usize;
        }
        stats
    }
}

fn entry_words(entry: &Entry<'_>) -> usize {
    match entry {
        Entry::Journal(_) => count_words(&strip_markup(entry.content())),
        Entry::Note(_) => count_words(entry.content()),
    }
}

/// Removes `<...>` spans. Not an HTML parser: nothing is decoded or validated.
pub fn strip_markup(content: &str) -> Cow<'_, str> {
    MARKUP_TAG.replace_all(content, "")
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{journal, note, with_content, with_note_content};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_collections_are_guarded() {
        let stats = WordStats::aggregate(&[], &[]);
        assert_eq!(
            stats,
            WordStats {
                total_words: 0,
                average_words_per_entry: 0,
                longest_entry: None,
            }
        );
    }

    #[test]
    fn strips_tags_from_journal_content_only() {
        assert_eq!(strip_markup("<p>Hello <b>big</b> world</p>"), "Hello big world");
        assert_eq!(count_words(&strip_markup("<p>one</p>\n<p>two three</p>")), 3);

        let notes = vec![with_note_content(note(1, "n", "2025-08-01"), "a <b> c")];
        let stats = WordStats::aggregate(&[], &notes);
        assert_eq!(stats.total_words, 3);
    }

    #[test]
    fn adjacent_tags_join_text() {
        assert_eq!(count_words(&strip_markup("<p>one</p><p>two</p>")), 1);
    }

    #[test]
    fn totals_average_and_longest() {
        let journals = vec![
            with_content(journal(1, "Short", "2025-08-01"), "<p>one two</p>"),
            with_content(journal(2, "Long", "2025-08-02"), "<h1>a b c d</h1> <p>e</p>"),
        ];
        let notes = vec![with_note_content(note(3, "Note", "2025-08-03"), "  x   y\tz\n")];

        let stats = WordStats::aggregate(&journals, &notes);

        assert_eq!(stats.total_words, 10);
        // 10 / 3 = 3.33
        assert_eq!(stats.average_words_per_entry, 3);
        let longest = stats.longest_entry.unwrap();
        assert_eq!(longest.title, "Long");
        assert_eq!(longest.word_count, 5);
        assert_eq!(longest.kind, EntryKind::Journal);
    }

    #[test]
    fn average_rounds_half_up() {
        let journals = vec![
            with_content(journal(1, "a", "2025-08-01"), "one"),
            with_content(journal(2, "b", "2025-08-01"), "one two"),
        ];
        assert_eq!(WordStats::aggregate(&journals, &[]).average_words_per_entry, 2);
    }

    #[test]
    fn journal_wins_tie_against_note() {
        let journals = vec![with_content(journal(1, "Journal", "2025-08-01"), "<p>a b</p>")];
        let notes = vec![with_note_content(note(2, "Note", "2025-08-01"), "c d")];
        let longest = WordStats::aggregate(&journals, &notes).longest_entry.unwrap();
        assert_eq!(longest.title, "Journal");
        assert_eq!(longest.kind, EntryKind::Journal);
    }

    #[test]
    fn longer_note_wins() {
        let journals = vec![with_content(journal(1, "Journal", "2025-08-01"), "a")];
        let notes = vec![with_note_content(note(2, "Note", "2025-08-01"), "b c")];
        let longest = WordStats::aggregate(&journals, &notes).longest_entry.unwrap();
        assert_eq!(longest.kind, EntryKind::Note);
        assert_eq!(longest.word_count, 2);
    }

    #[test]
    fn undated_entries_still_count() {
        let journals = vec![with_content(crate::tests::common::undated_journal(1, "u"), "a b c")];
        assert_eq!(WordStats::aggregate(&journals, &[]).total_words, 3);
    }
}
