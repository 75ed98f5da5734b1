//! Finalized custom events
//!
//! A [`CustomEvent`] is the immutable result of building a template.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::event::{EventValue, Properties, PropertyValue};

/// Key of the derived lifetime-value flag
pub const LTV_PROPERTY: &str = "ltv";

/// A finalized custom event, ready to hand to a tracker
///
/// Serialized shape:
///
/// ```json
/// {
///   "event_name": "registered_account",
///   "event_value": 123000000,
///   "transaction_id": "Wednesday 11/4/2015",
///   "properties": { "category": "Premium", "ltv": true }
/// }
/// ```
///
/// `event_value` and `transaction_id` are omitted when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEvent {
    name: String,
    value: Option<EventValue>,
    transaction_id: Option<String>,
    properties: Properties,
}

impl CustomEvent {
    pub(crate) fn new(
        name: &str,
        value: Option<EventValue>,
        transaction_id: Option<String>,
        properties: Properties,
    ) -> Self {
        Self {
            name: name.to_string(),
            value,
            transaction_id,
            properties,
        }
    }

    /// Event name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scaled event value, if set
    #[inline]
    pub fn value(&self) -> Option<EventValue> {
        self.value
    }

    /// Transaction ID, if set
    #[inline]
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    /// Property bag, `ltv` included
    #[inline]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Look up a single property
    #[inline]
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Lifetime-value flag: true exactly when a value was supplied
    #[inline]
    pub fn ltv(&self) -> bool {
        self.value.is_some()
    }

    /// Render the event as a JSON object
    pub fn to_json(&self) -> Value {
        let mut data = Map::new();
        data.insert("event_name".to_string(), Value::String(self.name.clone()));

        if let Some(value) = self.value {
            data.insert("event_value".to_string(), Value::from(value.scaled()));
        }

        if let Some(ref transaction_id) = self.transaction_id {
            data.insert(
                "transaction_id".to_string(),
                Value::String(transaction_id.clone()),
            );
        }

        let properties = self
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect();
        data.insert("properties".to_string(), Value::Object(properties));

        Value::Object(data)
    }

    /// Render the event as compact JSON text
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl Serialize for CustomEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
