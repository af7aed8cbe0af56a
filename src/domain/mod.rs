//! Domain types for the state machine inspector.
//!
//! # Module Organization
//!
//! - [`graph`] - Graph, transition and callback definitions plus the
//!   [`Configuration`] that holds them
//! - [`callable`] - The closed set of callable reference shapes
//! - [`values`] - Scalar-or-sequence clause values
//! - [`error`] - Resolution and configuration errors

// ============================================================================
// Module Declarations
// ============================================================================

pub mod callable;
pub mod error;
pub mod graph;
pub mod values;

// ============================================================================
// Re-exports
// ============================================================================

pub use callable::CallableRef;
pub use error::{ConfigError, ResolveError};
pub use graph::{
    CallbackDefinition, CallbackGroup, Callbacks, Configuration, GraphDefinition,
    TransitionDefinition, Transitions,
};
pub use values::ValueList;
