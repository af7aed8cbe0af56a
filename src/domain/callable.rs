//! Callable references bound to state machine callbacks.

use serde::Deserialize;
use serde::de::IgnoredAny;

// ============================================================================
// CallableRef
// ============================================================================

/// What a callback invokes, as declared in the configuration.
///
/// The loader settles the shape once, so rendering is an exhaustive match
/// rather than a runtime type check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCallable")]
pub enum CallableRef {
    /// A two-part `[target, member]` reference, e.g. a service method.
    NamedPair {
        /// The object or service the member belongs to.
        target: String,
        /// The method or function invoked on the target.
        member: String,
    },
    /// An anonymous inline function.
    Inline,
    /// Any other reference, displayed verbatim.
    Literal(String),
}

impl CallableRef {
    /// Creates a `target@member` style reference.
    #[must_use]
    pub fn named_pair(target: impl Into<String>, member: impl Into<String>) -> Self {
        Self::NamedPair {
            target: target.into(),
            member: member.into(),
        }
    }

    /// Creates a verbatim reference.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }
}

// `do: "fn"`, `do: [Target, member]` or `do: { closure: ... }`
#[derive(Deserialize)]
#[serde(
    untagged,
    expecting = "a callable name, a [target, member] pair or a { closure } map"
)]
enum RawCallable {
    Literal(String),
    Pair(String, String),
    Inline {
        #[allow(dead_code)]
        closure: IgnoredAny,
    },
}

impl From<RawCallable> for CallableRef {
    fn from(raw: RawCallable) -> Self {
        match raw {
            RawCallable::Literal(value) => Self::Literal(value),
            RawCallable::Pair(target, member) => Self::NamedPair { target, member },
            RawCallable::Inline { .. } => Self::Inline,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
