//! Tests for MediaEvent

use crate::media::{
    BROWSED_CONTENT_EVENT, CONSUMED_CONTENT_EVENT, MediaEvent, SHARED_CONTENT_EVENT,
    STARRED_CONTENT_EVENT,
};
use crate::test_utils::{
    assert_event_absent, assert_event_f64, assert_event_i64, assert_event_str,
    assert_nested_absent, assert_nested_bool, assert_nested_literal, assert_nested_str,
    event_data,
};
use crate::{CustomEvent, EventValue, TemplateError};

/// Apply every optional content attribute
fn with_content(event: MediaEvent, id: &str, description: &str, content_type: &str) -> MediaEvent {
    event
        .category("media-category")
        .id(id)
        .description(description)
        .content_type(content_type)
        .author("The Cool UA")
        .feature(true)
        .published_date("November 4, 2015")
}

fn assert_content(event: &CustomEvent, id: &str, description: &str, content_type: &str) {
    assert_nested_literal(event, "properties", "category", "\"media-category\"");
    assert_nested_literal(event, "properties", "id", &format!("\"{id}\""));
    assert_nested_literal(event, "properties", "description", &format!("\"{description}\""));
    assert_nested_literal(event, "properties", "type", &format!("\"{content_type}\""));
    assert_nested_literal(event, "properties", "author", "\"The Cool UA\"");
    assert_nested_bool(event, "properties", "feature", true);
    assert_nested_literal(event, "properties", "published_date", "\"November 4, 2015\"");
}

fn assert_only_ltv(event: &CustomEvent) {
    let data = event_data(event);
    let properties = data["properties"].as_object().unwrap();
    assert_eq!(properties.len(), 1, "unexpected properties: {properties:?}");
    assert_nested_bool(event, "properties", "ltv", false);
}

// =============================================================================
// Browsed
// =============================================================================

#[test]
fn test_browsed_event_basic() {
    let event = MediaEvent::browsed().build().unwrap();

    assert_event_str(&event, "event_name", BROWSED_CONTENT_EVENT);
    assert_only_ltv(&event);
}

#[test]
fn test_browsed_event() {
    let event = with_content(
        MediaEvent::browsed(),
        "starred-content-ID 1",
        "This is a starred content media event.",
        "audio type",
    )
    .build()
    .unwrap();

    assert_event_str(&event, "event_name", BROWSED_CONTENT_EVENT);
    assert_nested_bool(&event, "properties", "ltv", false);
    assert_content(
        &event,
        "starred-content-ID 1",
        "This is a starred content media event.",
        "audio type",
    );
    assert_nested_absent(&event, "properties", "source");
    assert_nested_absent(&event, "properties", "medium");
}

// =============================================================================
// Starred
// =============================================================================

#[test]
fn test_starred_event_basic() {
    let event = MediaEvent::starred().build().unwrap();

    assert_event_str(&event, "event_name", STARRED_CONTENT_EVENT);
    assert_only_ltv(&event);
}

#[test]
fn test_starred_event() {
    let event = with_content(
        MediaEvent::starred(),
        "starred-content-ID 1",
        "This is a starred content media event.",
        "audio type",
    )
    .build()
    .unwrap();

    assert_event_str(&event, "event_name", STARRED_CONTENT_EVENT);
    assert_nested_bool(&event, "properties", "ltv", false);
    assert_content(
        &event,
        "starred-content-ID 1",
        "This is a starred content media event.",
        "audio type",
    );
}

// =============================================================================
// Shared
// =============================================================================

#[test]
fn test_shared_event_basic() {
    let event = MediaEvent::shared("facebook", "social")
        .unwrap()
        .build()
        .unwrap();

    assert_event_str(&event, "event_name", SHARED_CONTENT_EVENT);
    assert_nested_bool(&event, "properties", "ltv", false);
    assert_nested_str(&event, "properties", "source", "facebook");
    assert_nested_str(&event, "properties", "medium", "social");
    assert_eq!(event.properties().len(), 3);
}

#[test]
fn test_shared_event() {
    let event = with_content(
        MediaEvent::shared("facebook", "social").unwrap(),
        "shared-content-ID 2",
        "This is a shared content media event.",
        "video type",
    )
    .build()
    .unwrap();

    assert_event_str(&event, "event_name", SHARED_CONTENT_EVENT);
    assert_nested_bool(&event, "properties", "ltv", false);
    assert_nested_literal(&event, "properties", "source", "\"facebook\"");
    assert_nested_literal(&event, "properties", "medium", "\"social\"");
    assert_content(
        &event,
        "shared-content-ID 2",
        "This is a shared content media event.",
        "video type",
    );
}

#[test]
fn test_shared_event_requires_source() {
    let result = MediaEvent::shared("", "social");

    assert!(matches!(
        result,
        Err(TemplateError::EmptyArgument { field: "source" })
    ));
}

#[test]
fn test_shared_event_requires_medium() {
    let err = MediaEvent::shared("facebook", " ").unwrap_err();

    assert!(matches!(err, TemplateError::EmptyArgument { field: "medium" }));
    assert!(err.is_invalid_argument());
}

// =============================================================================
// Consumed
// =============================================================================

#[test]
fn test_consumed_event_basic() {
    let event = MediaEvent::consumed(None).build().unwrap();

    assert_event_str(&event, "event_name", CONSUMED_CONTENT_EVENT);
    assert_only_ltv(&event);
    assert_event_absent(&event, "event_value");
}

#[test]
fn test_consumed_event() {
    let event = with_content(
        MediaEvent::consumed(Some(EventValue::from_f64(2.99).unwrap())),
        "consumed-content-ID 1",
        "This is a consumed content media event.",
        "audio type",
    )
    .build()
    .unwrap();

    assert_event_str(&event, "event_name", CONSUMED_CONTENT_EVENT);
    assert_event_f64(&event, "event_value", 2_990_000.0);
    assert_event_i64(&event, "event_value", 2_990_000);
    assert_nested_bool(&event, "properties", "ltv", true);
    assert_content(
        &event,
        "consumed-content-ID 1",
        "This is a consumed content media event.",
        "audio type",
    );
}

// =============================================================================
// Attribute behavior
// =============================================================================

#[test]
fn test_feature_is_bare_boolean() {
    let event = MediaEvent::browsed().feature(false).build().unwrap();

    assert_nested_literal(&event, "properties", "feature", "false");
    assert_nested_bool(&event, "properties", "feature", false);
}

#[test]
fn test_value_on_any_media_event() {
    let event = MediaEvent::starred()
        .value_decimal("123")
        .unwrap()
        .transaction_id("tx-9")
        .build()
        .unwrap();

    assert_event_i64(&event, "event_value", 123_000_000);
    assert_event_str(&event, "transaction_id", "tx-9");
    assert_nested_bool(&event, "properties", "ltv", true);
}

#[test]
fn test_value_setter_overrides_consumed_value() {
    let event = MediaEvent::consumed(Some(EventValue::from_units(1).unwrap()))
        .value_f64(2.5)
        .unwrap()
        .build()
        .unwrap();

    assert_event_i64(&event, "event_value", 2_500_000);
}

#[test]
fn test_unset_attributes_are_absent() {
    let event = MediaEvent::browsed().id("content-1").build().unwrap();

    for key in ["category", "description", "type", "author", "feature", "published_date"] {
        assert_nested_absent(&event, "properties", key);
    }
    assert_event_absent(&event, "transaction_id");
}

#[test]
fn test_idempotent_output() {
    let build = || {
        with_content(
            MediaEvent::shared("twitter", "social").unwrap(),
            "content-7",
            "A description",
            "video type",
        )
        .value_decimal("9.99")
        .unwrap()
        .build()
        .unwrap()
    };

    assert_eq!(build().to_json_string(), build().to_json_string());
}
