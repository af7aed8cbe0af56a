//! Console output sink drawing ASCII box tables with `tabled`.
//!
//! ```text
//! +------------+---------+------+
//! | Transition | From(s) | To   |
//! +------------+---------+------+
//! | cancel     | new     | void |
//! |            | paid    |      |
//! +------------+---------+------+
//! ```

use std::io::{self, Write};

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::ports::OutputSink;
use crate::render::{Cell, Table, TableRow};
use crate::theme::{Tone, paint};

// ============================================================================
// ConsoleOutput
// ============================================================================

/// Writes tables and messages to any [`Write`] target.
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> ConsoleOutput<W> {
    /// Creates a sink over `writer`, with or without ANSI colours.
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        writeln!(self.writer, "{}", paint(text, tone, self.color))
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn table(&mut self, table: &Table) -> io::Result<()> {
        self.writer.write_all(draw_table(table, self.color).as_bytes())?;
        self.writer.flush()
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        self.line(message, Tone::Info)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.line(message, Tone::Error)?;
        self.writer.flush()
    }
}

// ============================================================================
// Table Drawing
// ============================================================================

/// Draws `table` as newline-terminated text.
///
/// Rows between two separators are drawn as one block of multi-line cells,
/// so rules appear only below the header and at separator rows. A table
/// without rows draws only its header.
#[must_use]
pub fn draw_table(table: &Table, color: bool) -> String {
    let columns = table.column_count();
    let mut builder = Builder::default();
    builder.push_record(table.headers().iter().cloned());
    for block in table
        .rows()
        .split(|row| matches!(row, TableRow::Separator))
        .filter(|block| !block.is_empty())
    {
        builder.push_record(merge_block(block, columns));
    }

    let mut drawn = builder.build();
    drawn.with(Style::ascii());

    let header_height = table
        .headers()
        .iter()
        .map(|header| header.split('\n').count())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for (index, line) in drawn.to_string().lines().enumerate() {
        if color && (1..=header_height).contains(&index) {
            out.push_str(&paint_cells(line, Tone::Header));
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }

    out
}

fn cell_lines(cell: Option<&Cell>) -> Vec<&str> {
    match cell {
        Some(Some(text)) => text.split('\n').collect(),
        _ => vec![""],
    }
}

/// Stacks the rows of one block into a single record, padding each row to
/// its tallest cell so columns stay aligned.
fn merge_block(block: &[TableRow], columns: usize) -> Vec<String> {
    let mut merged: Vec<Vec<&str>> = vec![Vec::new(); columns];
    for row in block {
        let TableRow::Cells(cells) = row else {
            continue;
        };
        let lines: Vec<Vec<&str>> = (0..columns)
            .map(|column| cell_lines(cells.get(column)))
            .collect();
        let height = lines.iter().map(Vec::len).max().unwrap_or(1);
        for (column, mut cell) in lines.into_iter().enumerate() {
            cell.resize(height, "");
            merged[column].extend(cell);
        }
    }

    merged.into_iter().map(|lines| lines.join("\n")).collect()
}

/// Paints the cell contents of a drawn line, leaving the borders plain.
fn paint_cells(line: &str, tone: Tone) -> String {
    let pieces: Vec<&str> = line.split('|').collect();
    let last = pieces.len().saturating_sub(1);
    pieces
        .iter()
        .enumerate()
        .map(|(index, piece)| {
            if index == 0 || index == last {
                (*piece).to_string()
            } else {
                paint(piece, tone, true)
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

// ============================================================================
// Tests
// ============================================================================
