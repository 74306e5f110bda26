use super::frequency::{RankedFrequency, rank_categories, rank_moods, rank_weather};
use super::streak::current_streak;
use super::weekday::most_active_weekday;
use super::words::WordStats;
use crate::entry::{JournalEntry, NoteEntry};
use chrono::NaiveDate;
use serde::Serialize;

/// Every analytic computed over one snapshot of journals and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub total_journals: usize,
    pub total_notes: usize,
    pub streak: usize,
    pub moods: RankedFrequency,
    pub weather: RankedFrequency,
    pub categories: RankedFrequency,
    pub words: WordStats,
    pub most_active_weekday: Option<&'static str>,
}

impl Overview {
    pub fn compute(
        journals: &[JournalEntry],
        notes: &[NoteEntry],
        today: NaiveDate,
        top_categories: usize,
    ) -> Self {
        Self {
            total_journals: journals.len(),
            total_notes: notes.len(),
            streak: current_streak(journals, notes, today),
            moods: rank_moods(journals),
            weather: rank_weather(journals),
            categories: rank_categories(journals, notes, top_categories),
            words: WordStats::aggregate(journals, notes),
            most_active_weekday: most_active_weekday(journals, notes),
        }
    }

    pub fn total_entries(&self) -> usize {
        self.total_journals + self.total_notes
    }
}
