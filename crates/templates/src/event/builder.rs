//! Shared state for every event template
//!
//! Each template builder owns an [`EventCore`] for the top-level fields and
//! hands its own attributes over as a [`Properties`] bag when finalized.

use tracing::{debug, trace};

use crate::config::EventLimits;
use crate::error::{Result, TemplateError};
use crate::event::record::LTV_PROPERTY;
use crate::event::{CustomEvent, EventValue, Properties, PropertyValue};

/// Top-level fields common to all templates
#[derive(Debug, Clone)]
pub(crate) struct EventCore {
    name: &'static str,
    value: Option<EventValue>,
    transaction_id: Option<String>,
}

impl EventCore {
    #[inline]
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            value: None,
            transaction_id: None,
        }
    }

    #[inline]
    pub(crate) fn with_value(mut self, value: Option<EventValue>) -> Self {
        self.value = value;
        self
    }

    #[inline]
    pub(crate) fn set_value(&mut self, value: EventValue) {
        self.value = Some(value);
    }

    #[inline]
    pub(crate) fn set_transaction_id(&mut self, id: &str) {
        self.transaction_id = Some(id.to_string());
    }

    /// Finalize into a [`CustomEvent`]
    ///
    /// Adds the `ltv` flag, then checks field lengths and the property count.
    pub(crate) fn finish(self, mut properties: Properties, limits: &EventLimits) -> Result<CustomEvent> {
        let ltv = self.value.is_some();
        properties.insert(LTV_PROPERTY.to_string(), PropertyValue::Bool(ltv));

        if let Some(ref id) = self.transaction_id {
            check_length("transaction_id", id, limits.max_field_length)?;
        }

        for (key, value) in &properties {
            if let Some(s) = value.as_str() {
                check_length(key, s, limits.max_field_length)?;
            }
        }

        if properties.len() > limits.max_properties {
            debug!(
                event_name = self.name,
                count = properties.len(),
                max = limits.max_properties,
                "custom event has too many properties"
            );
            return Err(TemplateError::TooManyProperties {
                count: properties.len(),
                max: limits.max_properties,
            });
        }

        trace!(
            event_name = self.name,
            properties = properties.len(),
            ltv,
            "custom event built"
        );

        Ok(CustomEvent::new(
            self.name,
            self.value,
            self.transaction_id,
            properties,
        ))
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        debug!(field, len, max, "custom event field too long");
        return Err(TemplateError::field_too_long(field, len, max));
    }
    Ok(())
}

/// Validate a required construction parameter
///
/// # Errors
///
/// Returns `EmptyArgument` if the value is empty or only whitespace.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        debug!(field, "rejected empty template argument");
        return Err(TemplateError::EmptyArgument { field });
    }
    Ok(value.to_string())
}
