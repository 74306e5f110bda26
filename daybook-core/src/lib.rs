pub mod calendar;
pub mod config;
pub mod daybook;
pub mod entry;
pub mod stats;

pub use config::Config;
pub use daybook::{DayPreview, Daybook, LoadError, LoadResult};

#[cfg(test)]
mod tests;
