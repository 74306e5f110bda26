use crate::entry::{JournalEntry, NoteEntry, scan};
use chrono::Weekday;

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// The weekday with the most entries, or `None` when no entry has a usable date.
///
/// Ties go to the weekday that was tallied first, following scan order
/// (journals, then notes).
pub fn most_active_weekday(journals: &[JournalEntry], notes: &[NoteEntry]) -> Option<&'static str> {
    let mut tally: Vec<(Weekday, usize)> = Vec::with_capacity(7);

    for weekday in scan(journals, notes).filter_map(|e| e.date_key()?.weekday()) {
        match tally.iter_mut().find(|(day, _)| *day == weekday) {
            Some((_, count)) => *count += 1,
            None => tally.push((weekday, 1)),
        }
    }

    let mut best: Option<(Weekday, usize)> = None;
    for (day, count) in tally {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((day, count));
        }
    }
    best.map(|(day, _)| weekday_name(day))
}
