//! Tracker seam
//!
//! A [`Tracker`] accepts finished custom events. The real analytics client
//! (queueing, batching, delivery) lives behind this trait; this crate ships
//! two small implementations:
//!
//! - [`RecordingTracker`] - keeps every event in memory (tests, previews)
//! - [`TracingTracker`] - emits each event as a `tracing` record

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::error::Result;
use crate::event::CustomEvent;

/// Receives finalized custom events
pub trait Tracker {
    /// Hand a finished event to the analytics client
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Tracker` if the client refuses the event.
    fn track(&self, event: &CustomEvent) -> Result<()>;
}

impl<T: Tracker + ?Sized> Tracker for &T {
    fn track(&self, event: &CustomEvent) -> Result<()> {
        (**self).track(event)
    }
}

impl<T: Tracker + ?Sized> Tracker for Box<T> {
    fn track(&self, event: &CustomEvent) -> Result<()> {
        (**self).track(event)
    }
}

impl<T: Tracker + ?Sized> Tracker for Arc<T> {
    fn track(&self, event: &CustomEvent) -> Result<()> {
        (**self).track(event)
    }
}

/// Tracker that records events in memory
#[derive(Debug, Default)]
pub struct RecordingTracker {
    events: Mutex<Vec<CustomEvent>>,
}

impl RecordingTracker {
    /// Create an empty recorder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything tracked so far, in order
    pub fn events(&self) -> Vec<CustomEvent> {
        self.events.lock().clone()
    }

    /// Most recently tracked event
    pub fn last(&self) -> Option<CustomEvent> {
        self.events.lock().last().cloned()
    }

    /// Remove and return all recorded events
    pub fn take(&self) -> Vec<CustomEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Tracker for RecordingTracker {
    fn track(&self, event: &CustomEvent) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}

/// Tracker that logs each event at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTracker;

impl Tracker for TracingTracker {
    fn track(&self, event: &CustomEvent) -> Result<()> {
        info!(
            event_name = event.name(),
            ltv = event.ltv(),
            payload = %event.to_json_string(),
            "custom event tracked"
        );
        Ok(())
    }
}
