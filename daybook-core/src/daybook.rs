//! The `Daybook` facade: loads the exported collections and runs analytics over them.

use crate::calendar::{DateIndex, MonthCursor, MonthGrid};
use crate::config::Config;
use crate::entry::{DateKey, Entry, JournalEntry, NoteEntry};
use crate::stats::Overview;
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Daybook {
    pub config: Config,
}

/// Represents a non-critical issue that occurred while loading.
///
/// A bad file or record is reported here and skipped; the rest still loads.
#[derive(Debug)]
pub enum LoadError {
    FileError {
        path: PathBuf,
        error: anyhow::Error,
    },
    InvalidRecord {
        path: PathBuf,
        index: usize,
        error: anyhow::Error,
    },
}

/// Everything that could be loaded, plus what could not.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub journals: Vec<JournalEntry>,
    pub notes: Vec<NoteEntry>,
    pub errors: Vec<LoadError>,
}

/// The first entries of a day and how many exist in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPreview<'a> {
    pub date: NaiveDate,
    pub entries: Vec<Entry<'a>>,
    pub total: usize,
}

impl DayPreview<'_> {
    pub fn hidden(&self) -> usize {
        self.total - self.entries.len()
    }
}

impl Daybook {
    /// Creates a new `Daybook`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Reads both collections. Missing files count as empty collections.
    pub fn load(&self) -> LoadResult {
        let mut errors = Vec::new();
        let journals = read_collection(&self.config.journals_file, &mut errors);
        let notes = read_collection(&self.config.notes_file, &mut errors);
        debug!(journals = journals.len(), notes = notes.len(), "loaded collections");
        LoadResult {
            journals,
            notes,
            errors,
        }
    }

    pub fn overview(&self, data: &LoadResult) -> Overview {
        Overview::compute(
            &data.journals,
            &data.notes,
            self.config.reference_date,
            self.config.top_categories,
        )
    }

    /// The month grid for `cursor` with entry counts filled in.
    pub fn calendar(&self, data: &LoadResult, cursor: MonthCursor) -> Result<MonthGrid> {
        let index = DateIndex::build(&data.journals, &data.notes);
        let grid = cursor.grid().ok_or_else(|| {
            anyhow!(
                "cannot lay out month {}-{:02}",
                cursor.year(),
                cursor.month_index() + 1
            )
        })?;
        Ok(grid.with_counts(&index))
    }

    /// The cursor for the month containing the reference date.
    pub fn current_month(&self) -> MonthCursor {
        MonthCursor::from_date(self.config.reference_date)
    }

    /// Entries on `date`, limited to the configured preview size unless `all` is set.
    pub fn day<'a>(&self, index: &DateIndex<'a>, date: NaiveDate, all: bool) -> DayPreview<'a> {
        let key = DateKey::from(date);
        let total = index.count(&key);
        let shown = if all {
            index.get(&key)
        } else {
            index.preview(&key, self.config.preview_size)
        };
        DayPreview {
            date,
            entries: shown.to_vec(),
            total,
        }
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path, errors: &mut Vec<LoadError>) -> Vec<T> {
    if !path.exists() {
        debug!(path = %path.display(), "collection file missing, treating as empty");
        return Vec::new();
    }

    let records = match fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
        .and_then(|s| {
            serde_json::from_str::<Vec<serde_json::Value>>(&s)
                .with_context(|| format!("parsing {} as a JSON array", path.display()))
        }) {
        Ok(records) => records,
        Err(error) => {
            errors.push(LoadError::FileError {
                path: path.to_path_buf(),
                error,
            });
            return Vec::new();
        }
    };

    let mut items = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<T>(record) {
            Ok(item) => items.push(item),
            Err(error) => {
                warn!(path = %path.display(), index, %error, "skipping invalid record");
                errors.push(LoadError::InvalidRecord {
                    path: path.to_path_buf(),
                    index,
                    error: error.into(),
                });
            }
        }
    }
    items
}
