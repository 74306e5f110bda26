use crate::entry::{DateKey, JournalEntry, NoteEntry, effective_date_key};
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Consecutive days, ending exactly on `today`, with at least one entry.
///
/// The count is zero whenever nothing is dated `today`, even if yesterday was
/// logged, and stops at the first missing day. Keys that are not canonical
/// `YYYY-MM-DD` dates (including non-padded ones like `2025-8-5`) are ignored.
///
/// ```
/// # use daybook_core::stats::current_streak;
/// # use chrono::NaiveDate;
/// let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// assert_eq!(current_streak(&[], &[], today), 0);
/// ```
pub fn current_streak(journals: &[JournalEntry], notes: &[NoteEntry], today: NaiveDate) -> usize {
    let keys: BTreeSet<DateKey> = journals
        .iter()
        .map(|j| effective_date_key(j.date.as_deref()))
        .chain(notes.iter().map(|n| effective_date_key(n.created_at.as_deref())))
        .flatten()
        .filter(|key| key.to_date().map(DateKey::from).as_ref() == Some(key))
        .collect();

    let mut streak = 0;
    for (i, key) in keys.iter().rev().enumerate() {
        let expected = match today.checked_sub_days(Days::new(i as u64)) {
            Some(d) => DateKey::from(d),
            None => break,
        };
        if *key != expected {
            break;
        }
        streak += 1;
    }
    streak
}
