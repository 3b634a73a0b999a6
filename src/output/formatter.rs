use std::fmt;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

pub use crate::table::ROW_TERMINATOR;

use crate::table::{Column, ScoreTable, ERROR_TEXT};

/// Digits used by [`padded_score`] when no width is configured
pub const DEFAULT_SCORE_DIGITS: usize = 7;

/// Width of the rank field that starts every ranked row
const RANK_WIDTH: usize = 4;

/// Join cells, padding every cell but the last to its column's width.
/// Cells longer than their column are left as they are.
fn aligned_line(cells: &[String], columns: &[Column], delimiter: &str) -> String {
    let last = cells.len().saturating_sub(1);
    let mut out = String::new();
    for (i, (cell, column)) in cells.iter().zip(columns).enumerate() {
        out.push_str(cell);
        if i != last {
            // Padded by hand: runtime widths past u16::MAX panic in format!
            let len = cell.chars().count();
            out.push_str(&" ".repeat(column.max_length.saturating_sub(len)));
            out.push_str(delimiter);
        }
    }
    out
}

impl ScoreTable {
    /// Column names aligned to the width of their example values
    pub fn column_headings_string(&self, delimiter: &str) -> String {
        let names: Vec<String> = self
            .column_details()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        aligned_line(&names, self.column_details(), delimiter)
    }

    /// A row's values aligned like the headings, or [`ERROR_TEXT`] for an
    /// invalid row
    pub fn row_string(&self, row: usize, delimiter: &str) -> String {
        match self.get_row_object(row) {
            Some(values) => {
                let cells: Vec<String> = values.iter().map(ToString::to_string).collect();
                aligned_line(&cells, self.column_details(), delimiter)
            }
            None => ERROR_TEXT.to_string(),
        }
    }

    /// [`ScoreTable::row_string`] preceded by the 1-based rank
    pub fn row_string_rank(&self, row: usize, delimiter: &str) -> String {
        format!(
            "{:<width$}{}{}",
            row + 1,
            delimiter,
            self.row_string(row, delimiter),
            width = RANK_WIDTH
        )
    }

    /// The first `number` ranked rows, without a header
    pub fn quick_list(&self, number: usize) -> String {
        let count = number.min(self.entries());
        let mut out = String::new();
        for row in 0..count {
            out.push_str(&self.row_string_rank(row, " "));
            out.push(ROW_TERMINATOR);
        }
        out
    }

    /// Every ranked row, without a header
    pub fn to_string_no_header(&self) -> String {
        self.quick_list(self.entries())
    }

    pub fn to_string_quick_list(&self) -> String {
        self.quick_list(self.entries())
    }

    /// Render the table with the rank key passed through `formatter`.
    ///
    /// ```
    /// use hiscore::{score_entry, ScoreTable};
    ///
    /// let mut table = ScoreTable::new();
    /// table.define_column("score", 1000);
    /// table.define_column("name", "AAA");
    /// table.add_score(score_entry![250, "HB"]);
    ///
    /// let text = table.to_string_with(|score| format!("{:05}", score));
    /// assert_eq!(text, "RANK SCORE NAME~1    00250 HB ~");
    /// ```
    pub fn to_string_with<F>(&self, formatter: F) -> String
    where
        F: Fn(i64) -> String,
    {
        let mut out = format!("RANK {}{}", self.column_headings_string(" "), ROW_TERMINATOR);
        for (i, row) in self.table_details().iter().enumerate() {
            let score = row
                .first()
                .map(|key| key.rank_key().map(&formatter).unwrap_or_else(|| key.to_string()))
                .unwrap_or_default();
            out.push_str(&format!("{:<width$} {} ", i + 1, score, width = RANK_WIDTH));
            for value in row.iter().skip(1) {
                out.push_str(&value.to_string());
                out.push(' ');
            }
            out.push(ROW_TERMINATOR);
        }
        out
    }
}

impl fmt::Display for ScoreTable {
    /// Header line followed by every ranked row, each ending in `~`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RANK {}{}{}",
            self.column_headings_string(" "),
            ROW_TERMINATOR,
            self.to_string_no_header()
        )
    }
}

/// Split rendered table text into its lines
pub fn render_lines(text: &str) -> Vec<&str> {
    text.split_terminator(ROW_TERMINATOR).collect()
}

/// Format a score in compact notation (1.5k, 2.3M, 847)
pub fn compact_score(score: i64) -> String {
    let magnitude = score.unsigned_abs() as f64;
    let sign = if score < 0 { "-" } else { "" };
    let formatted = if magnitude >= 1_000_000.0 {
        format!("{:.1}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}k", magnitude / 1_000.0)
    } else {
        format!("{:.0}", magnitude)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    let trimmed = formatted.replace(".0M", "M").replace(".0k", "k");
    format!("{}{}", sign, trimmed)
}

/// Formatter that zero-pads scores to a fixed number of digits
pub fn padded_score(digits: usize) -> impl Fn(i64) -> String {
    move |score| {
        let sign = if score < 0 { "-" } else { "" };
        let magnitude = score.unsigned_abs().to_string();
        let zeros = digits.saturating_sub(sign.len() + magnitude.len());
        format!("{}{}{}", sign, "0".repeat(zeros), magnitude)
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// How the terminal board is rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardOptions {
    /// Show scores as 1.5k / 2.3M instead of raw numbers
    pub compact: bool,
    /// Show at most this many rows
    pub limit: Option<usize>,
}

/// Render the table for a terminal, one line per row
pub fn format_board(table: &ScoreTable, options: BoardOptions, use_colors: bool) -> String {
    if table.is_empty() {
        return "No scores yet.".to_string();
    }

    let text = if options.compact {
        table.to_string_with(compact_score)
    } else {
        table.to_string()
    };
    let lines = render_lines(&text);
    let Some((header, rows)) = lines.split_first() else {
        return String::new();
    };
    let limit = options.limit.unwrap_or(rows.len());

    let mut out = Vec::with_capacity(rows.len() + 1);
    if use_colors {
        out.push(header.trim_end().bold().underline().to_string());
    } else {
        out.push(header.trim_end().to_string());
    }
    for (i, row) in rows.iter().take(limit).enumerate() {
        let row = row.trim_end();
        if use_colors && i == 0 {
            out.push(row.yellow().bold().to_string());
        } else {
            out.push(row.to_string());
        }
    }
    out.join("\n")
}
