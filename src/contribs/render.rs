//! # Grid Rendering
//!
//! Turns a [`ContributionRecord`] into the text the CLI prints. The output is a
//! calendar laid on its side: one row per weekday (Sunday first), one column
//! per week, with month names above the columns they start.
//!
//! ```text
//!
//! 2024-01-01 to 2024-12-29
//! Total contributions: 1234
//!
//!     Jan       Feb     Mar ...
//!
//!     · ░ · ▒ ...
//! Mon ░ ░ █ · ...
//!     ...
//!
//! Legend: ·=0 ░=1 ▒=2 ▓=3 █=4 (contribution level)
//! ```
//!
//! Every week takes exactly [`COLUMN_WIDTH`] columns in every row, whether
//! or not it has a day for that row, so the month axis lines up with the
//! cells below it. Everything is returned as a `String`; nothing here touches
//! stdout.

use crate::model::{ContributionRecord, Level, MonthInfo, Week, Weekday};
use crate::styles::shade;
use unicode_width::UnicodeWidthStr;

/// Left margin reserved for weekday labels ("Mon ").
pub const GUTTER_WIDTH: usize = 4;

/// One glyph plus one separator.
pub const COLUMN_WIDTH: usize = 2;

pub const NO_DATA: &str = "No contribution data available.";

// Mon, Wed, Fri
const LABELED_WEEKDAYS: [usize; 3] = [1, 3, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap glyphs in ANSI color sequences.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Renders the full graph: header, month axis, seven weekday rows and legend.
///
/// A record without weeks renders as the [`NO_DATA`] notice alone.
pub fn render(record: &ContributionRecord, options: RenderOptions) -> String {
    if record.weeks.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let mut lines = vec![
        String::new(),
        format!("{} to {}", record.from, record.to),
        format!("Total contributions: {}", record.total),
        String::new(),
        month_axis(&record.months),
        String::new(),
    ];
    lines.extend(Weekday::all().map(|weekday| weekday_row(&record.weeks, weekday, options)));
    lines.push(String::new());
    lines.push(legend(options));
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Month names over the columns they span. Months shorter than two weeks
/// have no room for a label but still take up their columns.
pub fn month_axis(months: &[MonthInfo]) -> String {
    let mut line = " ".repeat(GUTTER_WIDTH);
    for info in months {
        let label = if info.total_weeks >= 2 {
            info.month.abbrev()
        } else {
            String::new()
        };
        line.push_str(&pad_to_width(&label, info.total_weeks * COLUMN_WIDTH));
    }
    line.truncate(line.trim_end().len());
    line
}

pub fn weekday_row(weeks: &[Week], weekday: Weekday, options: RenderOptions) -> String {
    let mut row = gutter(weekday);
    for week in weeks {
        match week.day(weekday) {
            Some(day) => {
                row.push_str(&shade(day.level).paint(options.color));
                row.push(' ');
            }
            None => row.push_str(&" ".repeat(COLUMN_WIDTH)),
        }
    }
    row
}

pub fn legend(options: RenderOptions) -> String {
    let mut line = String::from("Legend: ");
    for level in Level::all() {
        line.push_str(&format!("{}={} ", shade(level).paint(options.color), level));
    }
    line.push_str("(contribution level)");
    line
}

fn gutter(weekday: Weekday) -> String {
    if LABELED_WEEKDAYS.contains(&weekday.index()) {
        pad_to_width(&format!("{} ", weekday.label()), GUTTER_WIDTH)
    } else {
        " ".repeat(GUTTER_WIDTH)
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
