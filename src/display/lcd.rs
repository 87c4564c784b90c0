//! Character display abstraction.

use crate::core::DisplayConfig;

/// A fixed grid of character cells addressed by (column, row).
pub trait CharacterDisplay {
    fn columns(&self) -> usize;

    fn rows(&self) -> usize;

    /// Blank every cell.
    fn clear(&mut self);

    /// Write `text` starting at (`column`, `row`).
    ///
    /// A `'\n'` continues at column 0 of the next row. Characters that fall
    /// outside the grid are dropped.
    fn write_at(&mut self, column: usize, row: usize, text: &str);
}

/// In-memory display, used by tests and the terminal front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextDisplay {
    columns: usize,
    cells: Vec<Vec<char>>,
}

impl TextDisplay {
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            cells: vec![vec![' '; columns]; rows],
        }
    }

    #[must_use]
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.columns, config.rows)
    }

    /// Contents of one row, trailing blanks included. Empty for rows
    /// outside the grid.
    #[must_use]
    pub fn line(&self, row: usize) -> String {
        self.cells.get(row).map(|cells| cells.iter().collect()).unwrap_or_default()
    }

    /// Every row with trailing blanks trimmed.
    #[must_use]
    pub fn trimmed_lines(&self) -> Vec<String> {
        (0..self.cells.len())
            .map(|row| self.line(row).trim_end().to_string())
            .collect()
    }

    /// Character at one cell, if it exists.
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|cells| cells.get(column)).copied()
    }
}

impl CharacterDisplay for TextDisplay {
    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.cells.len()
    }

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(' ');
        }
    }

    fn write_at(&mut self, column: usize, row: usize, text: &str) {
        let (mut column, mut row) = (column, row);
        for ch in text.chars() {
            if ch == '\n' {
                row += 1;
                column = 0;
                continue;
            }
            if let Some(cell) = self.cells.get_mut(row).and_then(|cells| cells.get_mut(column)) {
                *cell = ch;
            }
            column += 1;
        }
    }
}

impl std::fmt::Display for TextDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.cells.len() {
            writeln!(f, "{}", self.line(row))?;
        }
        Ok(())
    }
}
