//! Account module - account lifecycle events
//!
//! Builds the `registered_account` custom event.

mod builder;


pub use builder::{AccountEvent, REGISTERED_ACCOUNT_EVENT};
