use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the exported collections.
    pub data_dir: PathBuf,
    /// JSON array of journal entries. Defaults to `{data_dir}/journals.json`.
    pub journals_file: PathBuf,
    /// JSON array of notes. Defaults to `{data_dir}/notes.json`.
    pub notes_file: PathBuf,
    /// The day streaks are counted back from. Not read from the file; defaults to today.
    pub reference_date: NaiveDate,
    /// How many categories the overview ranks.
    pub top_categories: usize,
    /// How many entries of a day are shown before the rest is elided.
    pub preview_size: usize,
    pub date_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    journals_file: Option<PathBuf>,
    notes_file: Option<PathBuf>,
    top_categories: Option<usize>,
    preview_size: Option<usize>,
    date_format: Option<String>,
}

impl Config {
    pub const DEFAULT_TOP_CATEGORIES: usize = 5;
    pub const DEFAULT_PREVIEW_SIZE: usize = 3;

    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let data_dir = file_config.data_dir.unwrap_or_else(Self::default_data_dir);
        let journals_file = file_config
            .journals_file
            .unwrap_or_else(|| data_dir.join("journals.json"));
        let notes_file = file_config
            .notes_file
            .unwrap_or_else(|| data_dir.join("notes.json"));

        Ok(Self {
            data_dir,
            journals_file,
            notes_file,
            reference_date: Local::now().date_naive(),
            top_categories: file_config
                .top_categories
                .unwrap_or(Self::DEFAULT_TOP_CATEGORIES),
            preview_size: file_config
                .preview_size
                .unwrap_or(Self::DEFAULT_PREVIEW_SIZE),
            date_format: Self::check_date_format(
                file_config
                    .date_format
                    .unwrap_or_else(|| "%A, %d %b %Y".to_string()),
            )
            .context("invalid date_format")?,
        })
    }

    /// Rejects strftime strings chrono cannot render, so formatting never fails later.
    fn check_date_format(date_format: String) -> Result<String> {
        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            bail!("'{date_format}' is not a valid strftime format");
        }
        Ok(date_format)
    }

    /// Default data root: `{data_dir}/daybook`
    /// - macOS:   `~/Library/Application Support/daybook`
    /// - Linux:   `$XDG_DATA_HOME/daybook` or `~/.local/share/daybook`
    /// - Windows: `%APPDATA%\daybook`
    fn default_data_dir() -> PathBuf {
        match BaseDirs::new() {
            Some(base) => base.data_dir().join("daybook"),
            None => PathBuf::from("./daybook"),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("daybook").join("config.toml"));
            v.push(b.config_dir().join("daybook").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
