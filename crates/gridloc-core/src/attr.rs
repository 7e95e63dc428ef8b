//! Per-point attribute values.

use crate::precision::format_float;
use indexmap::IndexMap;
use std::fmt;

/// Attributes recorded for a single grid point, keyed by name.
///
/// Insertion-ordered so that rendering is deterministic.
pub type Attributes = IndexMap<String, AttrValue>;

/// A single attribute value attached to a grid point.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Free-form text, written verbatim.
    Text(String),
    /// Signed integer.
    Int(i64),
    /// Floating-point number, written with at least one fractional digit.
    Float(f64),
    /// Boolean flag, written as `true` / `false`.
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_float(*v)),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(AttrValue::from("1").to_string(), "1");
        assert_eq!(AttrValue::from(7).to_string(), "7");
        assert_eq!(AttrValue::from(2.0).to_string(), "2.0");
        assert_eq!(AttrValue::from(true).to_string(), "true");
    }
}
