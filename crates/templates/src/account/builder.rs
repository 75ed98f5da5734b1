//! Account event template

use crate::config::EventLimits;
use crate::error::Result;
use crate::event::{CustomEvent, EventCore, EventValue, Properties, insert_opt};
use crate::tracker::Tracker;

/// Event name for a newly registered account
pub const REGISTERED_ACCOUNT_EVENT: &str = "registered_account";

/// Builder for account lifecycle events
///
/// # Example
///
/// ```
/// use tell_templates::{AccountEvent, EventValue};
///
/// let event = AccountEvent::registered()
///     .value(EventValue::from_units(123).unwrap())
///     .transaction_id("Wednesday 11/4/2015")
///     .category("Premium")
///     .build()
///     .unwrap();
///
/// assert_eq!(event.name(), "registered_account");
/// assert!(event.ltv());
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct AccountEvent {
    core: EventCore,
    category: Option<String>,
}

impl AccountEvent {
    /// Start a `registered_account` event
    pub fn registered() -> Self {
        Self {
            core: EventCore::new(REGISTERED_ACCOUNT_EVENT),
            category: None,
        }
    }

    /// Set the event value
    #[inline]
    pub fn value(mut self, value: EventValue) -> Self {
        self.core.set_value(value);
        self
    }

    /// Set the event value from a float
    ///
    /// # Errors
    ///
    /// Returns error if the value is negative, non-finite or out of range.
    pub fn value_f64(self, value: f64) -> Result<Self> {
        Ok(self.value(EventValue::from_f64(value)?))
    }

    /// Set the event value from a decimal string such as `"19.99"`
    ///
    /// # Errors
    ///
    /// Returns error if the string is not a decimal, or is negative or out of range.
    pub fn value_decimal(self, value: &str) -> Result<Self> {
        Ok(self.value(value.parse()?))
    }

    /// Set the transaction ID
    #[inline]
    pub fn transaction_id(mut self, id: &str) -> Self {
        self.core.set_transaction_id(id);
        self
    }

    /// Set the account category (e.g., "Premium")
    #[inline]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Build the event with default limits
    ///
    /// # Errors
    ///
    /// Returns error if a field exceeds [`EventLimits::default`].
    pub fn build(self) -> Result<CustomEvent> {
        self.build_with(&EventLimits::default())
    }

    /// Build the event with explicit limits
    ///
    /// # Errors
    ///
    /// Returns error if a field exceeds `limits`.
    pub fn build_with(self, limits: &EventLimits) -> Result<CustomEvent> {
        let mut properties = Properties::new();
        insert_opt(&mut properties, "category", self.category);
        self.core.finish(properties, limits)
    }

    /// Build the event and hand it to `tracker`
    ///
    /// # Errors
    ///
    /// Returns error if building fails or the tracker rejects the event.
    pub fn track<T: Tracker + ?Sized>(self, tracker: &T) -> Result<CustomEvent> {
        let event = self.build()?;
        tracker.track(&event)?;
        Ok(event)
    }
}
