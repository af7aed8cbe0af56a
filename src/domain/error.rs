//! Error types for graph resolution and configuration loading.
//!
//! Resolution failures are user-facing: their messages are printed as-is and
//! mapped to a failing exit status. Configuration errors carry the offending
//! path so the top-level report points at the right file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Resolution Errors
// ============================================================================

/// Reasons a graph could not be resolved for reporting.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The configuration contains no graphs at all.
    #[error("There are no state machines configured.")]
    NoGraphsConfigured,

    /// The requested or chosen graph is not a configuration key.
    #[error("The provided state machine graph is not configured.")]
    GraphNotConfigured {
        /// The name that was looked up.
        name: String,
    },

    /// The interactive prompt failed to read or write.
    #[error("Failed to prompt for a state machine graph: {0}")]
    Prompt(#[source] io::Error),
}

impl ResolveError {
    /// Create a not configured error for the given name.
    #[must_use]
    pub fn not_configured(name: impl Into<String>) -> Self {
        Self::GraphNotConfigured { name: name.into() }
    }

    /// Returns `true` for the failures reported to the user as a single line.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::NoGraphsConfigured | Self::GraphNotConfigured { .. })
    }

    /// Converts the error into an I/O error. Prompt failures yield their
    /// original source so the error kind is kept.
    #[must_use]
    pub fn into_io_error(self) -> io::Error {
        match self {
            Self::Prompt(source) => source,
            other => io::Error::other(other),
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Failures while locating or parsing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("Configuration file '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file extension is neither JSON nor YAML.
    #[error(
        "Unsupported configuration format for '{}' (expected .json, .yaml or .yml)",
        .path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    /// The JSON document does not describe a state machine configuration.
    #[error("Invalid JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The YAML document does not describe a state machine configuration.
    #[error("Invalid YAML in '{}': {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

// ============================================================================
// Tests
// ============================================================================
