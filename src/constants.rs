//! Application constants for the state machine inspector.
//!
//! Configuration file names, user-facing messages and table headers live
//! here so the loader, resolver and renderer agree on them.

// ============================================================================
// Configuration Constants
// ============================================================================

/// Application name used for the configuration directory.
pub const APP_NAME: &str = "sm-debug";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "SM_DEBUG_CONFIG";

/// Configuration file names searched for, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "state-machine.yaml",
    "state-machine.yml",
    "state-machine.json",
];

// ============================================================================
// Message Constants
// ============================================================================

/// Question shown when no graph was named on the command line.
pub const CHOOSE_GRAPH_QUESTION: &str = "Which state machine would you like to know about?";

/// Prefix of the line echoing an interactively chosen graph.
pub const SELECTED_PREFIX: &str = "You have just selected: ";

/// Index of the pre-selected graph in the choice list.
pub const DEFAULT_CHOICE: usize = 0;

// ============================================================================
// Table Header Constants
// ============================================================================

/// Header of the single-column states table.
pub const STATES_HEADER: &str = "Configured States:";

/// Headers of the transitions table.
pub const TRANSITION_HEADERS: [&str; 3] = ["Transition", "From(s)", "To"];

/// Suffix appended to the capitalized callback type.
pub const CALLBACKS_SUFFIX: &str = " Callbacks";

/// Trailing headers of every callbacks table.
pub const CALLBACK_HEADERS: [&str; 3] = ["On", "Do", "Args"];

/// Text shown in the `Do` column for inline functions.
pub const INLINE_CALLABLE: &str = "Closure";
