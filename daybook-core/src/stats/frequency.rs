//! Frequency ranking of categorical values (mood, weather, category name).

use crate::entry::{JournalEntry, NoteEntry, scan};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyCount {
    pub value: String,
    pub count: usize,
}

/// Values ordered by descending count. Equal counts keep the order in which
/// the values were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedFrequency(Vec<FrequencyCount>);

impl RankedFrequency {
    pub fn top(mut self, n: usize) -> Self {
        self.0.truncate(n);
        self
    }

    pub fn first(&self) -> Option<&FrequencyCount> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyCount> {
        self.0.iter()
    }
}

/// Counts trimmed, non-empty values and ranks them.
///
/// ```
/// # use daybook_core::stats::rank;
/// let ranked = rank(vec![Some("Happy"), Some("Happy"), Some("Sad"), Some(""), Some("Happy"), None]);
/// let pairs: Vec<_> = ranked.iter().map(|f| (f.value.as_str(), f.count)).collect();
/// assert_eq!(pairs, vec![("Happy", 3), ("Sad", 1)]);
/// ```
pub fn rank<I, S>(values: I) -> RankedFrequency
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut counts: Vec<FrequencyCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for value in values.into_iter().flatten() {
        let value = value.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        match positions.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(value.to_string(), counts.len());
                counts.push(FrequencyCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    RankedFrequency(counts)
}

pub fn rank_moods(journals: &[JournalEntry]) -> RankedFrequency {
    rank(journals.iter().map(|j| j.mood.as_deref()))
}

pub fn rank_weather(journals: &[JournalEntry]) -> RankedFrequency {
    rank(journals.iter().map(|j| j.weather.as_deref()))
}

/// Category names across journals then notes, capped to `limit` results.
pub fn rank_categories(journals: &[JournalEntry], notes: &[NoteEntry], limit: usize) -> RankedFrequency {
    rank(scan(journals, notes).map(|e| e.category().map(|c| c.name.as_str()))).top(limit)
}
