//! Lenient scalar values used by state names and clauses.
//!
//! Every state name, target and clause value may be a string, number or
//! boolean and is kept as its string form. `from`, `on` and `args` may also
//! be a single scalar or a sequence. Both shapes deserialize into a
//! [`ValueList`] so the renderer only ever deals with an ordered list of
//! strings.

use serde::{Deserialize, Deserializer};

// ============================================================================
// Raw Shapes
// ============================================================================

/// A scalar as it appears in a configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, expecting = "a string, number or boolean")]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Flag(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged, expecting = "a scalar or a sequence of scalars")]
enum RawValues {
    One(Scalar),
    Many(Vec<Scalar>),
}

/// Deserializes one scalar into its string form.
pub(crate) fn scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

/// Deserializes a sequence of scalars into their string forms.
pub(crate) fn scalars<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(values.into_iter().map(String::from).collect())
}

// ============================================================================
// ValueList
// ============================================================================

/// An ordered list of clause values, coerced from a scalar or a sequence.
///
/// Order and duplicates are preserved exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawValues")]
pub struct ValueList(Vec<String>);

impl ValueList {
    /// Creates a list from anything that yields string-like items.
    #[must_use]
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Joins the values with a newline, one value per rendered line.
    #[must_use]
    pub fn join_lines(&self) -> String {
        self.0.join("\n")
    }
}

impl From<RawValues> for ValueList {
    fn from(raw: RawValues) -> Self {
        match raw {
            RawValues::One(scalar) => Self(vec![scalar.into()]),
            RawValues::Many(scalars) => Self(scalars.into_iter().map(String::from).collect()),
        }
    }
}

impl From<&str> for ValueList {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

// ============================================================================
// Tests
// ============================================================================
