//! Retail event templates

use crate::config::EventLimits;
use crate::error::Result;
use crate::event::{CustomEvent, EventCore, EventValue, Properties, insert_opt, require_non_empty};
use crate::tracker::Tracker;

pub const BROWSED_PRODUCT_EVENT: &str = "browsed";
pub const ADDED_TO_CART_EVENT: &str = "added_to_cart";
pub const STARRED_PRODUCT_EVENT: &str = "starred_product";
pub const PURCHASED_EVENT: &str = "purchased";
pub const SHARED_PRODUCT_EVENT: &str = "shared_product";

/// Builder for retail product events
///
/// # Example
///
/// ```
/// use tell_templates::RetailEvent;
///
/// let event = RetailEvent::purchased()
///     .value_decimal("49.95")
///     .unwrap()
///     .transaction_id("order-1234")
///     .id("sku-88")
///     .brand("Acme")
///     .new_item(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(event.value().unwrap().scaled(), 49_950_000);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct RetailEvent {
    core: EventCore,
    id: Option<String>,
    category: Option<String>,
    description: Option<String>,
    brand: Option<String>,
    new_item: Option<bool>,
    source: Option<String>,
    medium: Option<String>,
}

impl RetailEvent {
    fn with_name(name: &'static str) -> Self {
        Self {
            core: EventCore::new(name),
            id: None,
            category: None,
            description: None,
            brand: None,
            new_item: None,
            source: None,
            medium: None,
        }
    }

    pub fn browsed() -> Self {
        Self::with_name(BROWSED_PRODUCT_EVENT)
    }

    pub fn added_to_cart() -> Self {
        Self::with_name(ADDED_TO_CART_EVENT)
    }

    pub fn starred() -> Self {
        Self::with_name(STARRED_PRODUCT_EVENT)
    }

    pub fn purchased() -> Self {
        Self::with_name(PURCHASED_EVENT)
    }

    /// Start a `shared_product` event
    ///
    /// # Errors
    ///
    /// Returns `EmptyArgument` if `source` or `medium` is empty.
    pub fn shared(source: &str, medium: &str) -> Result<Self> {
        let source = require_non_empty("source", source)?;
        let medium = require_non_empty("medium", medium)?;

        let mut event = Self::with_name(SHARED_PRODUCT_EVENT);
        event.source = Some(source);
        event.medium = Some(medium);
        Ok(event)
    }

    #[inline]
    pub fn value(mut self, value: EventValue) -> Self {
        self.core.set_value(value);
        self
    }

    /// # Errors
    ///
    /// Returns error if the value is negative, non-finite or out of range.
    pub fn value_f64(self, value: f64) -> Result<Self> {
        Ok(self.value(EventValue::from_f64(value)?))
    }

    /// # Errors
    ///
    /// Returns error if the string is not a decimal, or is negative or out of range.
    pub fn value_decimal(self, value: &str) -> Result<Self> {
        Ok(self.value(value.parse()?))
    }

    #[inline]
    pub fn transaction_id(mut self, id: &str) -> Self {
        self.core.set_transaction_id(id);
        self
    }

    /// Set the product ID (SKU or similar)
    #[inline]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[inline]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    #[inline]
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[inline]
    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = Some(brand.to_string());
        self
    }

    /// Flag the product as a new arrival
    #[inline]
    pub fn new_item(mut self, new_item: bool) -> Self {
        self.new_item = Some(new_item);
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
        insert_opt(&mut properties, "id", self.id);
        insert_opt(&mut properties, "category", self.category);
        insert_opt(&mut properties, "description", self.description);
        insert_opt(&mut properties, "brand", self.brand);
        insert_opt(&mut properties, "new_item", self.new_item);
        insert_opt(&mut properties, "source", self.source);
        insert_opt(&mut properties, "medium", self.medium);

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
