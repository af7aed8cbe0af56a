//! State machine graph definitions.
//!
//! These types mirror the configuration file one to one. They are loaded once
//! and never mutated afterwards.

use indexmap::IndexMap;
use serde::Deserialize;

use super::callable::CallableRef;
use super::values::{self, ValueList};

// ============================================================================
// Type Aliases
// ============================================================================

/// Transitions keyed by name, in declaration order.
pub type Transitions = IndexMap<String, TransitionDefinition>;

/// Callbacks of one type keyed by callback name, in declaration order.
pub type CallbackGroup = IndexMap<String, CallbackDefinition>;

/// Callback groups keyed by callback type (`guard`, `before`, `after`, ...).
pub type Callbacks = IndexMap<String, CallbackGroup>;

fn default_graph_label() -> String {
    "default".to_string()
}

// ============================================================================
// Definitions
// ============================================================================

/// One complete state machine graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphDefinition {
    /// Domain object type the machine governs.
    pub class: String,
    /// The graph's own declared label.
    #[serde(default = "default_graph_label")]
    pub graph: String,
    /// State names in declaration order.
    #[serde(default, deserialize_with = "values::scalars")]
    pub states: Vec<String>,
    /// Named transitions in declaration order.
    #[serde(default)]
    pub transitions: Transitions,
    /// Callback groups, when any are configured.
    #[serde(default)]
    pub callbacks: Option<Callbacks>,
}

/// A named edge from one or more source states to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransitionDefinition {
    pub from: ValueList,
    #[serde(deserialize_with = "values::scalar")]
    pub to: String,
}

/// A hook bound to a callback type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallbackDefinition {
    #[serde(default)]
    pub on: Option<ValueList>,
    #[serde(rename = "do")]
    pub callable: CallableRef,
    #[serde(default)]
    pub args: Option<ValueList>,
}

impl GraphDefinition {
    /// Label shown next to the graph name when choosing interactively.
    ///
    /// # Returns
    ///
    /// `"<name>\t(<class> - <graph>)"`.
    #[must_use]
    pub fn choice_label(&self, name: &str) -> String {
        format!("{name}\t({} - {})", self.class, self.graph)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Every configured graph, keyed by name in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    graphs: IndexMap<String, GraphDefinition>,
}

impl Configuration {
    /// Creates a configuration from `(name, definition)` pairs.
    #[must_use]
    pub fn new<I>(graphs: I) -> Self
    where
        I: IntoIterator<Item = (String, GraphDefinition)>,
    {
        Self {
            graphs: graphs.into_iter().collect(),
        }
    }

    /// Returns `true` when no graph is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Number of configured graphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Looks up a graph by exact name.
    #[cfg(test)]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GraphDefinition> {
        self.graphs.get(name)
    }

    /// Looks up a graph by exact name, returning the stored key as well.
    #[must_use]
    pub fn get_key_value(&self, name: &str) -> Option<(&String, &GraphDefinition)> {
        self.graphs.get_key_value(name)
    }

    /// Iterates graphs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &GraphDefinition)> {
        self.graphs.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
