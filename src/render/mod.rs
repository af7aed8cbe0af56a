//! Report rendering.
//!
//! - [`table`] - The [`Table`] model handed to output sinks
//! - [`graph`] - States, transitions and callbacks tables for one graph

pub mod graph;
pub mod table;

pub use graph::{render_callbacks, render_graph, render_states, render_transitions};
pub use table::{Cell, Table, TableRow};
