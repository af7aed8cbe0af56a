//! Boundaries between the report pipeline and the terminal.
//!
//! The resolver asks an [`InteractionPort`] to pick a graph and the report
//! writes to an [`OutputSink`]. Console implementations live in
//! [`crate::console`]; tests use the recording doubles in `test_utils`.

use std::io;

use crate::render::Table;

/// Asks the user to pick one of several labelled candidates.
pub trait InteractionPort {
    /// Presents `candidates` under `question` and blocks until one is chosen.
    ///
    /// # Arguments
    ///
    /// * `question` - Prompt text
    /// * `candidates` - Labels in display order, never empty
    /// * `default` - Index of the pre-selected candidate
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    ///
    /// # Returns
    ///
    /// The chosen label, exactly as given in `candidates`.
    fn choose_one(
        &mut self,
        question: &str,
        candidates: &[String],
        default: usize,
    ) -> io::Result<String>;
}

/// Receives the rendered report.
pub trait OutputSink {
    /// Writes one table.
    fn table(&mut self, table: &Table) -> io::Result<()>;

    /// Writes a single informational line.
    fn info(&mut self, message: &str) -> io::Result<()>;

    /// Writes a single error line.
    fn error(&mut self, message: &str) -> io::Result<()>;
}
