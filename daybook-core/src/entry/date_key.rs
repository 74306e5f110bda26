use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

const KEY_FORMAT: &str = "%Y-%m-%d";
const KEY_LEN: usize = 10;

/// A `YYYY-MM-DD` calendar-date key.
///
/// Keys taken from records are not validated: a malformed date string is kept
/// as its first 10 characters and simply never matches a key produced from a
/// real date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar date this key names, if it is well formed.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, KEY_FORMAT).ok()
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.to_date().map(|d| d.weekday())
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date.format(KEY_FORMAT).to_string())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Truncates a raw date or timestamp field to its date key.
///
/// Returns `None` for a missing or empty field. Truncation counts characters,
/// so a multi-byte prefix is never split.
pub fn effective_date_key(raw: Option<&str>) -> Option<DateKey> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    let end = raw
        .char_indices()
        .nth(KEY_LEN)
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    Some(DateKey(raw[..end].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_timestamps() {
        let key = effective_date_key(Some("2025-08-15T21:00:00.000Z")).unwrap();
        assert_eq!(key.as_str(), "2025-08-15");
        assert_eq!(key.to_date(), NaiveDate::from_ymd_opt(2025, 8, 15));
    }

    #[test]
    fn plain_date_is_kept() {
        let key = effective_date_key(Some("2024-02-29")).unwrap();
        assert_eq!(key.as_str(), "2024-02-29");
        assert_eq!(key.weekday(), Some(Weekday::Thu));
    }

    #[test]
    fn missing_or_empty_has_no_key() {
        assert_eq!(effective_date_key(None), None);
        assert_eq!(effective_date_key(Some("")), None);
    }

    #[test]
    fn malformed_passes_through_unparsed() {
        let key = effective_date_key(Some("not a date at all")).unwrap();
        assert_eq!(key.as_str(), "not a date");
        assert_eq!(key.to_date(), None);

        let short = effective_date_key(Some("2025")).unwrap();
        assert_eq!(short.as_str(), "2025");
    }

    #[test]
    fn multibyte_prefix_is_not_split() {
        let key = effective_date_key(Some("ñññññññññññ")).unwrap();
        assert_eq!(key.as_str().chars().count(), 10);
    }

    #[test]
    fn key_from_date_matches_extracted_key() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(DateKey::from(d), effective_date_key(Some("2025-01-05 08:00")).unwrap());
    }
}
