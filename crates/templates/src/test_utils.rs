//! Test utilities for asserting on custom event payloads
//!
//! Every helper reads the serialized JSON form of the event, the same shape
//! a tracker would transmit. A key that is absent is never treated as equal
//! to a key that is present with `null` or an empty value.
//!
//! # Example
//!
//! ```
//! use tell_templates::AccountEvent;
//! use tell_templates::test_utils::{assert_event_absent, assert_event_str, assert_nested_bool};
//!
//! let event = AccountEvent::registered().build().unwrap();
//!
//! assert_event_str(&event, "event_name", "registered_account");
//! assert_event_absent(&event, "transaction_id");
//! assert_nested_bool(&event, "properties", "ltv", false);
//! ```

use serde_json::Value;

use crate::event::CustomEvent;

/// Get the event's serialized data
pub fn event_data(event: &CustomEvent) -> Value {
    event.to_json()
}

#[track_caller]
fn field(event: &CustomEvent, key: &str) -> Value {
    match event_data(event).get(key) {
        Some(value) => value.clone(),
        None => panic!("event {:?} has no field {key:?}", event.name()),
    }
}

#[track_caller]
fn nested_field(event: &CustomEvent, key: &str, nested_key: &str) -> Value {
    let outer = field(event, key);
    let Some(object) = outer.as_object() else {
        panic!("event field {key:?} is not an object: {outer}");
    };
    match object.get(nested_key) {
        Some(value) => value.clone(),
        None => panic!("event field {key:?} has no nested field {nested_key:?}"),
    }
}

#[track_caller]
fn expect_str(value: &Value, path: &str) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => panic!("event value for {path} is not a string: {value}"),
    }
}

#[track_caller]
fn expect_bool(value: &Value, path: &str) -> bool {
    match value.as_bool() {
        Some(b) => b,
        None => panic!("event value for {path} is not a boolean: {value}"),
    }
}

#[track_caller]
fn expect_i64(value: &Value, path: &str) -> i64 {
    match value.as_i64() {
        Some(n) => n,
        None => panic!("event value for {path} is not an integer: {value}"),
    }
}

#[track_caller]
fn expect_f64(value: &Value, path: &str) -> f64 {
    match value.as_f64() {
        Some(n) => n,
        None => panic!("event value for {path} is not a number: {value}"),
    }
}

/// Assert a top-level field is absent (not present, not even as `null`)
#[track_caller]
pub fn assert_event_absent(event: &CustomEvent, key: &str) {
    let data = event_data(event);
    assert!(
        data.get(key).is_none(),
        "event's value for {key} should not be set, got {}",
        data[key]
    );
}

/// Assert a top-level string field
#[track_caller]
pub fn assert_event_str(event: &CustomEvent, key: &str, expected: &str) {
    let actual = expect_str(&field(event, key), key);
    assert_eq!(actual, expected, "event's value for {key} is unexpected");
}

/// Assert a top-level string field, where `None` means the field must be absent
#[track_caller]
pub fn assert_event_opt_str(event: &CustomEvent, key: &str, expected: Option<&str>) {
    match expected {
        Some(expected) => assert_event_str(event, key, expected),
        None => assert_event_absent(event, key),
    }
}

/// Assert a top-level integer field
#[track_caller]
pub fn assert_event_i64(event: &CustomEvent, key: &str, expected: i64) {
    let actual = expect_i64(&field(event, key), key);
    assert_eq!(actual, expected, "event's value for {key} is unexpected");
}

/// Assert a top-level numeric field
#[track_caller]
pub fn assert_event_f64(event: &CustomEvent, key: &str, expected: f64) {
    let actual = expect_f64(&field(event, key), key);
    assert_eq!(actual, expected, "event's value for {key} is unexpected");
}

/// Assert a top-level boolean field
#[track_caller]
pub fn assert_event_bool(event: &CustomEvent, key: &str, expected: bool) {
    let actual = expect_bool(&field(event, key), key);
    assert_eq!(actual, expected, "event's value for {key} is unexpected");
}

/// Assert a nested field is absent
#[track_caller]
pub fn assert_nested_absent(event: &CustomEvent, key: &str, nested_key: &str) {
    let outer = field(event, key);
    assert!(
        outer.get(nested_key).is_none(),
        "event's value for {key}.{nested_key} should not be set, got {}",
        outer[nested_key]
    );
}

/// Assert a nested string field
#[track_caller]
pub fn assert_nested_str(event: &CustomEvent, key: &str, nested_key: &str, expected: &str) {
    let path = format!("{key}.{nested_key}");
    let actual = expect_str(&nested_field(event, key, nested_key), &path);
    assert_eq!(actual, expected, "event's value for {path} is unexpected");
}

/// Assert a nested boolean field
#[track_caller]
pub fn assert_nested_bool(event: &CustomEvent, key: &str, nested_key: &str, expected: bool) {
    let path = format!("{key}.{nested_key}");
    let actual = expect_bool(&nested_field(event, key, nested_key), &path);
    assert_eq!(actual, expected, "event's value for {path} is unexpected");
}

/// Assert a nested integer field
#[track_caller]
pub fn assert_nested_i64(event: &CustomEvent, key: &str, nested_key: &str, expected: i64) {
    let path = format!("{key}.{nested_key}");
    let actual = expect_i64(&nested_field(event, key, nested_key), &path);
    assert_eq!(actual, expected, "event's value for {path} is unexpected");
}

/// Assert a nested numeric field
#[track_caller]
pub fn assert_nested_f64(event: &CustomEvent, key: &str, nested_key: &str, expected: f64) {
    let path = format!("{key}.{nested_key}");
    let actual = expect_f64(&nested_field(event, key, nested_key), &path);
    assert_eq!(actual, expected, "event's value for {path} is unexpected");
}

/// Assert the JSON literal text of a nested field
///
/// Distinguishes `"true"` (a quoted string) from `true` (a boolean).
#[track_caller]
pub fn assert_nested_literal(event: &CustomEvent, key: &str, nested_key: &str, expected: &str) {
    let actual = nested_field(event, key, nested_key).to_string();
    assert_eq!(
        actual, expected,
        "event's literal for {key}.{nested_key} is unexpected"
    );
}
