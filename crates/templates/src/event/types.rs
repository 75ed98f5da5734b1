//! Property values for the event property bag
//!
//! A closed set of JSON scalars: strings, booleans and numbers.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::{Result, TemplateError};

/// Ordered property bag attached to every custom event
pub type Properties = BTreeMap<String, PropertyValue>;

/// A single property value
///
/// Serializes to its JSON literal: strings quoted, booleans and numbers bare.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Quoted JSON string
    String(String),
    /// Bare JSON boolean
    Bool(bool),
    /// Bare JSON number
    Number(Number),
}

impl PropertyValue {
    /// Create a number property from a float
    ///
    /// # Errors
    ///
    /// Returns error if the value is NaN or infinite; JSON cannot carry those.
    pub fn number(value: f64) -> Result<Self> {
        Number::from_f64(value)
            .map(Self::Number)
            .ok_or(TemplateError::NonFiniteNumber)
    }

    /// Get the string value, if this is a string
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
        }
    }

    /// Render the JSON literal text, e.g. `"Premium"` (with quotes) or `true`
    pub fn to_literal(&self) -> String {
        self.to_json().to_string()
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for PropertyValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl TryFrom<f64> for PropertyValue {
    type Error = TemplateError;

    fn try_from(value: f64) -> Result<Self> {
        Self::number(value)
    }
}

/// Insert `value` under `key` when it is set; unset attributes stay absent
pub(crate) fn insert_opt<V: Into<PropertyValue>>(
    properties: &mut Properties,
    key: &str,
    value: Option<V>,
) {
    if let Some(value) = value {
        properties.insert(key.to_string(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_is_quoted() {
        let value = PropertyValue::from("Premium");
        assert_eq!(value.to_literal(), "\"Premium\"");
        assert_eq!(value.as_str(), Some("Premium"));
        assert_eq!(value.as_bool(), None);
    }

    #[test]
    fn test_string_literal_escapes() {
        let value = PropertyValue::from("say \"hi\"");
        assert_eq!(value.to_literal(), r#""say \"hi\"""#);
    }

    #[test]
    fn test_bool_literal_is_bare() {
        let value = PropertyValue::from(true);
        assert_eq!(value.to_literal(), "true");
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_number_literals() {
        assert_eq!(PropertyValue::from(42i64).to_literal(), "42");
        assert_eq!(PropertyValue::number(2.5).unwrap().to_literal(), "2.5");
        assert_eq!(PropertyValue::from(7u64).as_f64(), Some(7.0));
    }

    #[test]
    fn test_non_finite_number_rejected() {
        assert!(matches!(
            PropertyValue::number(f64::NAN),
            Err(TemplateError::NonFiniteNumber)
        ));
        assert!(matches!(
            PropertyValue::try_from(f64::NEG_INFINITY),
            Err(TemplateError::NonFiniteNumber)
        ));
    }

    #[test]
    fn test_serialize_untagged() {
        let mut properties = Properties::new();
        properties.insert("a".to_string(), "x".into());
        properties.insert("b".to_string(), false.into());
        properties.insert("c".to_string(), 3i32.into());
        assert_eq!(
            serde_json::to_string(&properties).unwrap(),
            r#"{"a":"x","b":false,"c":3}"#
        );
    }

    #[test]
    fn test_insert_opt_skips_none() {
        let mut properties = Properties::new();
        insert_opt(&mut properties, "set", Some("value"));
        insert_opt::<&str>(&mut properties, "unset", None);
        assert!(properties.contains_key("set"));
        assert!(!properties.contains_key("unset"));
    }
}
