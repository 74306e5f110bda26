use super::theme::Palette;
use daybook_core::calendar::{CalendarCell, MonthGrid};
use daybook_core::entry::Entry;
use daybook_core::stats::{Overview, RankedFrequency};
use daybook_core::{DayPreview, LoadError};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: Palette::skin(),
            opts,
        }
    }

    /// Prints markdown through the skin, or as-is when colors are off.
    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
            if !md.ends_with('\n') {
                println!();
            }
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.opts.use_color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn print_overview(&self, overview: &Overview) {
        let mut md = String::from("# Overview\n\n");
        md.push_str(&format!(
            "* Entries: **{}** ({} journals, {} notes)\n",
            overview.total_entries(),
            overview.total_journals,
            overview.total_notes
        ));
        md.push_str(&format!("* Writing streak: **{}** day(s)\n", overview.streak));
        md.push_str(&format!(
            "* Most active day: **{}**\n",
            overview.most_active_weekday.unwrap_or("-")
        ));
        md.push_str(&format!(
            "* Words: **{}** total, **{}** per entry\n",
            overview.words.total_words, overview.words.average_words_per_entry
        ));
        if let Some(longest) = &overview.words.longest_entry {
            md.push_str(&format!(
                "* Longest entry: {} `{}` ({} words)\n",
                longest.title, longest.kind, longest.word_count
            ));
        }
        md.push('\n');
        md.push_str(&ranking_section("Moods", &overview.moods));
        md.push_str(&ranking_section("Weather", &overview.weather));
        md.push_str(&ranking_section("Top categories", &overview.categories));
        self.print_md(&md);
    }

    pub fn print_calendar(&self, grid: &MonthGrid) {
        let title = format!(
            "# {} {}\n",
            MONTH_NAMES[grid.month_index as usize],
            grid.year
        );
        self.print_md(&title);

        if self.opts.use_color {
            self.skin.print_text(&calendar_table(grid));
        } else {
            println!("{}", WEEKDAY_HEADERS.map(|d| format!("{d:>6}")).concat());
            for row in grid.rows() {
                let line: String = row.iter().map(|c| format!("{:>6}", plain_cell(c))).collect();
                println!("{line}");
            }
        }

        let total = format!("{} entries this month.", grid.month_total());
        println!("{}", self.paint(&total, Palette::BLUE));
    }

    pub fn print_day(&self, day: &DayPreview<'_>) {
        let heading = format!("# {}\n", day.date.format(&self.opts.date_format));
        self.print_md(&heading);
        if day.total == 0 {
            println!("{}", self.paint("No entries found.", Palette::COMMENT));
            return;
        }
        for entry in &day.entries {
            self.print_entry_line(entry);
        }
        if day.hidden() > 0 {
            let more = format!("... and {} more (use --all)", day.hidden());
            println!("{}", self.paint(&more, Palette::COMMENT));
        }
    }

    pub fn print_entry_line(&self, entry: &Entry<'_>) {
        let kind = self.paint(&format!("[{}]", entry.kind()), Palette::GREEN);
        let title = self.paint(entry.title(), Palette::YELLOW);
        let category = entry
            .category()
            .map(|c| self.paint(&format!(" #{}", c.name), Palette::PURPLE))
            .unwrap_or_default();
        println!("{kind} {title}{category}");
    }

    pub fn print_errors(&self, errors: &[LoadError]) {
        if errors.is_empty() {
            return;
        }
        self.print_md("\n# Errors:");
        for error in errors {
            let message = match error {
                LoadError::FileError { path, error } => {
                    format!("* Could not process '{}': {}", path.display(), error)
                }
                LoadError::InvalidRecord { path, index, error } => {
                    format!("* Skipped record {} in '{}': {}", index, path.display(), error)
                }
            };
            self.print_md(&message);
        }
    }
}

fn ranking_section(title: &str, ranked: &RankedFrequency) -> String {
    let mut md = format!("## {title}\n");
    if ranked.is_empty() {
        md.push_str("* none recorded\n");
    }
    for item in ranked.iter() {
        md.push_str(&format!("* {}: **{}**\n", item.value, item.count));
    }
    md.push('\n');
    md
}

/// `15` for an empty day, `15 (2)` with entries, `*31*` outside the month.
fn table_cell(cell: &CalendarCell) -> String {
    let day = cell.date.format("%-d").to_string();
    let day = if cell.is_current_month {
        day
    } else {
        format!("*{day}*")
    };
    match cell.entry_count {
        0 => day,
        n => format!("{day} **({n})**"),
    }
}

fn plain_cell(cell: &CalendarCell) -> String {
    let day = cell.date.format("%-d").to_string();
    let day = if cell.is_current_month {
        day
    } else {
        format!("'{day}")
    };
    match cell.entry_count {
        0 => day,
        n => format!("{day}:{n}"),
    }
}

fn calendar_table(grid: &MonthGrid) -> String {
    let mut md = String::from("|:-:|:-:|:-:|:-:|:-:|:-:|:-:|\n");
    md.push_str(&format!("|{}|\n", WEEKDAY_HEADERS.join("|")));
    md.push_str("|-|-|-|-|-|-|-|\n");
    for row in grid.rows() {
        let cells: Vec<String> = row.iter().map(table_cell).collect();
        md.push_str(&format!("|{}|\n", cells.join("|")));
    }
    md.push_str("|-|-|-|-|-|-|-|\n");
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daybook_core::calendar::DateIndex;
    use daybook_core::entry::JournalEntry;

    fn journal(id: i64, date: &str) -> JournalEntry {
        JournalEntry {
            id,
            title: "t".to_string(),
            content: String::new(),
            date: Some(date.to_string()),
            mood: None,
            weather: None,
            location: None,
            category: None,
        }
    }

    #[test]
    fn cells_mark_counts_and_adjacent_days() {
        let journals = vec![journal(1, "2025-08-15"), journal(2, "2025-08-15"), journal(3, "2025-07-31")];
        let index = DateIndex::build(&journals, &[]);
        let grid = MonthGrid::generate(2025, 7).unwrap().with_counts(&index);

        let aug15 = grid.cell(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()).unwrap();
        assert_eq!(table_cell(aug15), "15 **(2)**");
        assert_eq!(plain_cell(aug15), "15:2");

        let jul31 = grid.cell(NaiveDate::from_ymd_opt(2025, 7, 31).unwrap()).unwrap();
        assert_eq!(table_cell(jul31), "*31* **(1)**");
        assert_eq!(plain_cell(jul31), "'31:1");
    }

    #[test]
    fn table_has_header_and_six_weeks() {
        let grid = MonthGrid::generate(2025, 1).unwrap();
        let table = calendar_table(&grid);
        assert!(table.contains("|Sun|Mon|Tue|Wed|Thu|Fri|Sat|"));
        // alignment, header, separator, six rows, closing rule
        assert_eq!(table.lines().count(), 10);
    }
}
