//! End-to-end checks through the public API only

use tell_templates::test_utils::{assert_event_i64, assert_nested_bool, assert_nested_literal};
use tell_templates::{
    AccountEvent, ErrorKind, EventLimits, EventValue, MediaEvent, RecordingTracker, RetailEvent,
    Tracker, TracingTracker,
};

#[test]
fn every_template_tracks_through_one_tracker() {
    let tracker = RecordingTracker::new();

    AccountEvent::registered().track(&tracker).unwrap();
    MediaEvent::browsed().track(&tracker).unwrap();
    MediaEvent::starred().track(&tracker).unwrap();
    MediaEvent::consumed(None).track(&tracker).unwrap();
    MediaEvent::shared("facebook", "social")
        .unwrap()
        .track(&tracker)
        .unwrap();
    RetailEvent::purchased().track(&tracker).unwrap();

    let names: Vec<String> = tracker
        .take()
        .into_iter()
        .map(|e| e.name().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "registered_account",
            "browsed_content",
            "starred_content",
            "consumed_content",
            "shared_content",
            "purchased",
        ]
    );
}

#[test]
fn limits_from_toml_apply_to_build() {
    let limits: EventLimits = "max_field_length = 8".parse().unwrap();

    let err = MediaEvent::browsed()
        .description("longer than eight")
        .build_with(&limits)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert!(MediaEvent::browsed().id("short").build_with(&limits).is_ok());
}

#[test]
fn trackers_compose_behind_dyn() {
    let trackers: Vec<Box<dyn Tracker>> = vec![Box::new(TracingTracker), Box::new(RecordingTracker::new())];
    let event = AccountEvent::registered()
        .value(EventValue::from_units(123).unwrap())
        .category("Premium")
        .build()
        .unwrap();

    for tracker in &trackers {
        tracker.track(&event).unwrap();
    }

    assert_event_i64(&event, "event_value", 123_000_000);
    assert_nested_bool(&event, "properties", "ltv", true);
    assert_nested_literal(&event, "properties", "category", "\"Premium\"");
}

#[test]
fn shared_without_medium_produces_no_event() {
    let tracker = RecordingTracker::new();
    let result = MediaEvent::shared("facebook", "").and_then(|event| event.track(&tracker));

    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert!(tracker.is_empty());
}
