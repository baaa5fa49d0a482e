use std::sync::OnceLock;

use regex::Regex;

/// Pipe table: a header row containing `|` directly followed by a delimiter row.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Whether the line can be a header or body row.
    pub fn has_pipe(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Whether the line is a delimiter row such as `---|:---:|`.
    ///
    /// At least two columns are required.
    pub fn is_delimiter(line: &str) -> bool {
        static DELIMITER: OnceLock<Regex> = OnceLock::new();
        DELIMITER
            .get_or_init(|| {
                Regex::new(r"^\s*\|?\s*[-:]+\s*(?:\|\s*[-:]+\s*)+\|?\s*$")
                    .expect("Invalid table delimiter regex")
            })
            .is_match(line)
    }

    /// Splits a row into trimmed cells, dropping the empty cells produced by
    /// a leading or trailing pipe.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }

    /// Splits a body row and fits it to `width` columns, dropping extra cells
    /// and padding missing ones with empty cells.
    pub fn body_cells(line: &str, width: usize) -> Vec<&str> {
        let mut cells = Self::split_cells(line);
        cells.resize(width, "");
        cells
    }
}
