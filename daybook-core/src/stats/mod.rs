mod frequency;
mod overview;
mod streak;
mod weekday;
mod words;

pub use frequency::{FrequencyCount, RankedFrequency, rank, rank_categories, rank_moods, rank_weather};
pub use overview::Overview;
pub use streak::current_streak;
pub use weekday::{most_active_weekday, weekday_name};
pub use words::{LongestEntry, WordStats, count_words, strip_markup};
