//! Alias values: strings or numbers, strictly typed.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The value an alias resolves to.
///
/// Serialized untagged, so the persisted form is a plain JSON string or
/// number. Equality is strict across variants: `"1"` and `1` are different
/// values and never displace each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasValue {
    Number(Number),
    String(String),
}

impl AliasValue {
    /// The string form, if this value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            Self::Number(_) => None,
        }
    }

    /// Build a number value from a float. Returns `None` for NaN or infinity.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Number)
    }
}

impl fmt::Display for AliasValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AliasValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AliasValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Number> for AliasValue {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AliasValue {
    fn from(n: i64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<u64> for AliasValue {
    fn from(n: u64) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<i32> for AliasValue {
    fn from(n: i32) -> Self {
        Self::Number(Number::from(n))
    }
}
