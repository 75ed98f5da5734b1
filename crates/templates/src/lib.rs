//! Tell Event Templates
//!
//! This crate provides fluent builders for common custom analytics events.
//! Each template fixes the event name, collects optional attributes, and
//! produces an immutable [`CustomEvent`] ready to hand to a [`Tracker`].
//!
//! # Architecture
//!
//! The library is organized into domain-specific modules:
//!
//! - [`account`] - Account lifecycle (`registered_account`)
//! - [`media`] - Content interactions (browsed, starred, shared, consumed)
//! - [`retail`] - Product commerce (browsed, added to cart, purchased, ...)
//! - [`event`] - Finalized record, scaled values, property bag
//! - [`tracker`] - Seam to the analytics client
//! - [`test_utils`] - Assertions over the serialized payload
//!
//! # Quick Start
//!
//! ```
//! use tell_templates::{AccountEvent, MediaEvent, RecordingTracker, EventValue};
//!
//! let tracker = RecordingTracker::new();
//!
//! // Account registration with a value
//! AccountEvent::registered()
//!     .value(EventValue::from_units(123).unwrap())
//!     .category("Premium")
//!     .track(&tracker)
//!     .unwrap();
//!
//! // Shared media requires a source and medium
//! let event = MediaEvent::shared("facebook", "social")
//!     .unwrap()
//!     .id("shared-content-ID 2")
//!     .track(&tracker)
//!     .unwrap();
//!
//! assert_eq!(tracker.len(), 2);
//! assert!(!event.ltv());
//! ```
//!
//! # Payload Format
//!
//! ```json
//! {
//!   "event_name": "registered_account",
//!   "event_value": 123000000,
//!   "properties": { "category": "Premium", "ltv": true }
//! }
//! ```
//!
//! `event_value` is the decimal value multiplied by 1,000,000. Unset fields
//! are omitted, never sent as `null`.

mod config;
mod error;

pub mod account;
pub mod event;
pub mod media;
pub mod retail;
pub mod test_utils;
pub mod tracker;

// Re-export main types at crate root for convenience
pub use account::AccountEvent;
pub use config::{DEFAULT_MAX_FIELD_LENGTH, DEFAULT_MAX_PROPERTIES, EventLimits};
pub use error::{ErrorKind, Result, TemplateError};
pub use event::{CustomEvent, EventValue, Properties, PropertyValue};
pub use media::MediaEvent;
pub use retail::RetailEvent;
pub use tracker::{RecordingTracker, Tracker, TracingTracker};
