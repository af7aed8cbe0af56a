//! sm-debug - inspect declaratively configured state machine graphs.
//!
//! Loads a named collection of state machine graphs from a JSON or YAML file,
//! resolves one of them (by name or through a prompt) and renders its states,
//! transitions and callbacks as tables.
//!
//! # Module Organization
//!
//! - [`domain`] - Graph definitions, callable references and errors
//! - [`config`] - Configuration discovery and parsing
//! - [`resolver`] - Picks the graph to report on
//! - [`render`] - Builds the report tables
//! - [`report`] - Runs resolve-then-render against the ports
//! - [`ports`] - Interaction and output boundaries
//! - [`console`] - Terminal implementations of the ports
//! - [`theme`] - Console colours
//! - [`constants`] - Shared names, messages and headers
//!
//! # Example
//!
//! ```ignore
//! use sm_debug::{config, console::{ConsoleOutput, DefaultChoice}, report::report};
//!
//! let config = config::load(None)?;
//! let mut output = ConsoleOutput::new(std::io::stdout(), false);
//! let status = report(&config, Some("order"), &mut DefaultChoice, &mut output)?;
//! ```

pub mod config;
pub mod console;
pub mod constants;
pub mod domain;
pub mod ports;
pub mod render;
pub mod report;
pub mod resolver;
pub mod theme;

#[cfg(test)]
mod test_utils;

pub use domain::{Configuration, GraphDefinition, ResolveError};
pub use report::{ReportStatus, report};
