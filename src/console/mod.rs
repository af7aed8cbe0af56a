//! Terminal adapters for the report pipeline.
//!
//! - [`output`] - [`ConsoleOutput`], an [`OutputSink`](crate::ports::OutputSink)
//!   drawing ASCII tables
//! - [`prompt`] - [`TerminalPrompt`] and [`DefaultChoice`] interaction ports

pub mod output;
pub mod prompt;

pub use output::ConsoleOutput;
pub use prompt::{DefaultChoice, TerminalPrompt};
