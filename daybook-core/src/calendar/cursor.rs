use super::grid::MonthGrid;
use chrono::{Datelike, NaiveDate};

/// The month currently being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month_index: u32,
}

impl MonthCursor {
    /// `month_index` is zero-based. Returns `None` above 11 or for a year chrono
    /// cannot represent.
    pub fn new(year: i32, month_index: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month_index.checked_add(1)?, 1)?;
        Some(Self { year, month_index })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month_index: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1)
    }

    /// Moves by whole months, wrapping the year in either direction. `None` once
    /// the target month leaves chrono's date range.
    pub fn shift(self, months: i32) -> Option<Self> {
        let total = i64::from(self.year) * 12 + i64::from(self.month_index) + i64::from(months);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month_index = u32::try_from(total.rem_euclid(12)).ok()?;
        Self::new(year, month_index)
    }

    pub fn next(self) -> Option<Self> {
        self.shift(1)
    }

    pub fn prev(self) -> Option<Self> {
        self.shift(-1)
    }

    pub fn grid(&self) -> Option<MonthGrid> {
        MonthGrid::generate(self.year, self.month_index)
    }
}
