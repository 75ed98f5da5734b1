//! Media module - content interaction events
//!
//! Builds the browsed, starred, shared and consumed content events.

mod builder;

#[cfg(test)]
mod builder_test;

pub use builder::{
    BROWSED_CONTENT_EVENT, CONSUMED_CONTENT_EVENT, MediaEvent, SHARED_CONTENT_EVENT,
    STARRED_CONTENT_EVENT,
};
