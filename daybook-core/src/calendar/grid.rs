//! Fixed-size month grid: 6 weeks of 7 days, weeks starting on Sunday.

use super::index::DateIndex;
use crate::entry::DateKey;
use chrono::{Datelike, Days, NaiveDate};

pub const GRID_CELLS: usize = 42;
const WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub key: DateKey,
    pub is_current_month: bool,
    pub entry_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month (January = 0).
    pub month_index: u32,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Lays out the 42 days shown for a month, starting on the Sunday on or
    /// before the 1st. Counts start at zero; see [`MonthGrid::with_counts`].
    ///
    /// Returns `None` if `month_index` is not in `0..=11` or the dates are out
    /// of chrono's range.
    ///
    /// ```
    /// # use daybook_core::calendar::MonthGrid;
    /// # use chrono::{Datelike, Weekday};
    /// let grid = MonthGrid::generate(2025, 7).unwrap(); // August 2025
    ///
    /// assert_eq!(grid.cells().len(), 42);
    /// assert_eq!(grid.cells()[0].date.weekday(), Weekday::Sun);
    /// assert_eq!(grid.cells()[0].date.to_string(), "2025-07-27");
    /// ```
    pub fn generate(year: i32, month_index: u32) -> Option<Self> {
        if month_index > 11 {
            return None;
        }
        let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1)?;
        let lead = u64::from(first.weekday().num_days_from_sunday());
        let start = first.checked_sub_days(Days::new(lead))?;

        let mut cells = Vec::with_capacity(GRID_CELLS);
        let mut current = start;
        for i in 0..GRID_CELLS {
            cells.push(CalendarCell {
                date: current,
                key: DateKey::from(current),
                is_current_month: current.month0() == month_index,
                entry_count: 0,
            });
            if i + 1 < GRID_CELLS {
                current = current.succ_opt()?;
            }
        }

        Some(Self {
            year,
            month_index,
            cells,
        })
    }

    /// Fills every cell's count from `index`, including days outside the month.
    pub fn with_counts(mut self, index: &DateIndex<'_>) -> Self {
        for cell in &mut self.cells {
            cell.entry_count = index.count(&cell.key);
        }
        self
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// The grid as six week rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(WEEK)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    /// Sum of counts over the days that belong to the month.
    pub fn month_total(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.is_current_month)
            .map(|c| c.entry_count)
            .sum()
    }
}
