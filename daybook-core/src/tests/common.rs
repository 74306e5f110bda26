use crate::Config;
use crate::entry::{Category, JournalEntry, NoteEntry};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: PathBuf, reference_date: NaiveDate) -> Config {
    Config {
        journals_file: tmp_dir.join("journals.json"),
        notes_file: tmp_dir.join("notes.json"),
        data_dir: tmp_dir,
        reference_date,
        top_categories: 5,
        preview_size: 3,
        date_format: "%A, %d %b %Y".to_string(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn journal(id: i64, title: &str, date: &str) -> JournalEntry {
    JournalEntry {
        id,
        title: title.to_string(),
        content: String::new(),
        date: Some(date.to_string()),
        mood: None,
        weather: None,
        location: None,
        category: None,
    }
}

pub fn undated_journal(id: i64, title: &str) -> JournalEntry {
    JournalEntry {
        date: None,
        ..journal(id, title, "")
    }
}

pub fn note(id: i64, title: &str, created_at: &str) -> NoteEntry {
    NoteEntry {
        id,
        title: title.to_string(),
        content: String::new(),
        created_at: Some(created_at.to_string()),
        color: None,
        category: None,
        is_pinned: false,
    }
}

pub fn undated_note(id: i64, title: &str) -> NoteEntry {
    NoteEntry {
        created_at: None,
        ..note(id, title, "")
    }
}

fn category(name: &str) -> Category {
    Category {
        id: None,
        name: name.to_string(),
        color: None,
    }
}

pub fn with_mood(mut j: JournalEntry, mood: &str) -> JournalEntry {
    j.mood = Some(mood.to_string());
    j
}

pub fn with_weather(mut j: JournalEntry, weather: &str) -> JournalEntry {
    j.weather = Some(weather.to_string());
    j
}

pub fn with_category(mut j: JournalEntry, name: &str) -> JournalEntry {
    j.category = Some(category(name));
    j
}

pub fn with_content(mut j: JournalEntry, content: &str) -> JournalEntry {
    j.content = content.to_string();
    j
}

pub fn with_note_category(mut n: NoteEntry, name: &str) -> NoteEntry {
    n.category = Some(category(name));
    n
}

pub fn with_note_content(mut n: NoteEntry, content: &str) -> NoteEntry {
    n.content = content.to_string();
    n
}

/// Journals around Friday 2025-08-15: a three-day streak ending that day,
/// mostly Friday entries, "Happy" as the top mood and "Work" as the top category.
pub fn sample_journals() -> Vec<JournalEntry> {
    vec![
        with_content(
            with_category(
                with_weather(with_mood(journal(1, "Quiet morning", "2025-08-15"), "Happy"), "Sunny"),
                "Work",
            ),
            "<p>Wrote the <b>first</b> draft before breakfast.</p>",
        ),
        with_content(
            with_category(
                with_weather(with_mood(journal(2, "Long walk", "2025-08-13"), "Happy"), "Cloudy"),
                "Health",
            ),
            "<p>Eight kilometres along the river.</p>",
        ),
        with_category(
            with_weather(with_mood(journal(3, "Rainy day", "2025-08-08"), "Tired"), "Rainy"),
            "Work",
        ),
        undated_journal(4, "Undated"),
    ]
}

pub fn sample_notes() -> Vec<NoteEntry> {
    let mut pinned = with_note_category(note(11, "Book idea", "2025-08-01T09:00:00Z"), "Work");
    pinned.is_pinned = true;
    vec![
        with_note_content(
            with_note_category(note(10, "Groceries", "2025-08-14T18:30:00Z"), "Errands"),
            "milk eggs bread",
        ),
        pinned,
        note(12, "Scratch", ""),
    ]
}
