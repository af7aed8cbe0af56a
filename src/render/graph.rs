//! Turns a graph definition into report tables.
//!
//! Every function here is pure: the same definition always yields the same
//! tables, in the same order.

use crate::constants::{
    CALLBACK_HEADERS, CALLBACKS_SUFFIX, INLINE_CALLABLE, STATES_HEADER, TRANSITION_HEADERS,
};
use crate::domain::{
    CallableRef, CallbackGroup, Callbacks, GraphDefinition, Transitions, ValueList,
};

use super::table::{Cell, Table, cell};

// ============================================================================
// Graph Rendering
// ============================================================================

/// Renders the full report for one graph.
///
/// # Returns
///
/// The states table, the transitions table, then one callbacks table per
/// callback type when callbacks are configured.
#[must_use]
pub fn render_graph(definition: &GraphDefinition) -> Vec<Table> {
    let mut tables = vec![
        render_states(&definition.states),
        render_transitions(&definition.transitions),
    ];

    if let Some(callbacks) = &definition.callbacks {
        tables.extend(render_callbacks(callbacks));
    }

    tables
}

/// Renders the single-column states table.
///
/// States keep their declared order, duplicates included.
#[must_use]
pub fn render_states(states: &[String]) -> Table {
    let mut table = Table::new([STATES_HEADER]);
    for state in states {
        table.push_row(vec![cell(state.as_str())]);
    }
    table
}

/// Renders the transitions table.
///
/// Source states share one cell, one per line. A separator sits between
/// consecutive transitions but never after the last one.
#[must_use]
pub fn render_transitions(transitions: &Transitions) -> Table {
    let mut table = Table::new(TRANSITION_HEADERS);
    let last = transitions.len().saturating_sub(1);

    for (index, (name, transition)) in transitions.iter().enumerate() {
        table.push_row(vec![
            cell(name.as_str()),
            cell(transition.from.join_lines()),
            cell(transition.to.as_str()),
        ]);

        if index != last {
            table.push_separator();
        }
    }

    table
}

/// Renders one table per callback type, in configuration order.
#[must_use]
pub fn render_callbacks(callbacks: &Callbacks) -> Vec<Table> {
    callbacks
        .iter()
        .map(|(kind, group)| render_callback_group(kind, group))
        .collect()
}

fn render_callback_group(kind: &str, group: &CallbackGroup) -> Table {
    let title = format!("{}{CALLBACKS_SUFFIX}", capitalize_first(kind));
    let headers = std::iter::once(title).chain(CALLBACK_HEADERS.map(String::from));
    let mut table = Table::new(headers);

    for (name, callback) in group {
        table.push_row(vec![
            cell(name.as_str()),
            format_clause(callback.on.as_ref()),
            cell(format_callable(&callback.callable)),
            format_clause(callback.args.as_ref()),
        ]);
    }

    table
}

// ============================================================================
// Value Formatting
// ============================================================================

/// Formats a callable for the `Do` column.
#[must_use]
pub fn format_callable(callable: &CallableRef) -> String {
    match callable {
        CallableRef::NamedPair { target, member } => format!("{target}@{member}"),
        CallableRef::Inline => INLINE_CALLABLE.to_string(),
        CallableRef::Literal(value) => value.clone(),
    }
}

/// Formats an optional clause, one value per line. Absent clauses stay absent.
#[must_use]
pub fn format_clause(values: Option<&ValueList>) -> Cell {
    values.map(ValueList::join_lines)
}

/// Upper-cases the first character only.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
