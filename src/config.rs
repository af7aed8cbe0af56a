//! Configuration discovery and loading.
//!
//! The graph configuration is read once at startup from a JSON or YAML file.
//!
//! # Configuration File Location
//!
//! The first existing file wins:
//! 1. The path given with `--config` or `SM_DEBUG_CONFIG`
//! 2. `state-machine.yaml`, `state-machine.yml` or `state-machine.json` in the
//!    current directory
//! 3. The same names inside the user configuration directory:
//!    - Linux: `~/.config/sm-debug/`
//!    - macOS: `~/Library/Application Support/sm-debug/`
//!    - Windows: `%APPDATA%/sm-debug/`
//!
//! When no file is found the configuration is empty.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_FILE_NAMES};
use crate::domain::{ConfigError, Configuration};

// ============================================================================
// ConfigFormat
// ============================================================================

/// Supported configuration encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detects the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

// ============================================================================
// Discovery
// ============================================================================

/// Directories searched when no explicit file is given.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push(APP_NAME);
        roots.push(config_dir);
    }
    roots
}

/// Finds the first known configuration file inside `roots`.
#[must_use]
pub fn find_in(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .inspect(|candidate| tracing::trace!("Checking {}", candidate.display()))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// Loading
// ============================================================================

/// Loads the configuration from an explicit path or the default locations.
///
/// # Arguments
///
/// * `explicit` - Path given by the user, if any
///
/// # Errors
///
/// Returns an error if the explicit file is missing, or if the file found
/// cannot be read or parsed.
///
/// # Returns
///
/// The parsed configuration, or an empty one when no file exists.
pub fn load(explicit: Option<&Path>) -> Result<Configuration, ConfigError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => Some(path.to_path_buf()),
        None => find_in(&search_dirs()),
    };

    match path {
        Some(path) => load_from_path(&path),
        None => {
            tracing::debug!("No configuration file found, using an empty configuration");
            Ok(Configuration::default())
        }
    }
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the format is unsupported, the file cannot be read,
/// or its content is not a valid configuration.
pub fn load_from_path(path: &Path) -> Result<Configuration, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse(&content, format, path)?;
    tracing::debug!(
        "Loaded {} state machine graph(s) from {}",
        config.len(),
        path.display()
    );
    Ok(config)
}

/// Parses configuration text in the given format.
///
/// Blank documents are an empty configuration. `path` is only used for error
/// messages.
///
/// # Errors
///
/// Returns [`ConfigError::Json`] or [`ConfigError::Yaml`] on invalid content.
pub fn parse(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<Configuration, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Configuration::default());
    }

    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
