//! Sink-agnostic table model.
//!
//! A [`Table`] only carries headers and rows. Borders, widths and colours are
//! decided by whichever output sink draws it.

// ============================================================================
// Types
// ============================================================================

/// A cell value. `None` is an absent cell, drawn empty.
pub type Cell = Option<String>;

/// One row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Cells in header order. A cell may span several lines.
    Cells(Vec<Cell>),
    /// A horizontal rule between two rows.
    Separator,
}

/// Headers plus rows, ready to hand to an output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl Table {
    /// Creates an empty table with the given headers.
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row of cells.
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(TableRow::Cells(cells));
    }

    /// Appends a separator row.
    pub fn push_separator(&mut self) {
        self.rows.push(TableRow::Separator);
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of columns, taken from the headers.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of separator rows.
    #[must_use]
    pub fn separator_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, TableRow::Separator))
            .count()
    }

    /// Iterates the data rows, skipping separators.
    pub fn data_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Cells(cells) => Some(cells.as_slice()),
            TableRow::Separator => None,
        })
    }
}

/// Shorthand for a present cell.
#[must_use]
pub fn cell(value: impl Into<String>) -> Cell {
    Some(value.into())
}

// ============================================================================
// Tests
// ============================================================================
