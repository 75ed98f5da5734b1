//! Media event templates
//!
//! One builder covers every content interaction; the factory picks the name.

use crate::config::EventLimits;
use crate::error::Result;
use crate::event::{CustomEvent, EventCore, EventValue, Properties, insert_opt, require_non_empty};
use crate::tracker::Tracker;

/// Event name for browsing content
pub const BROWSED_CONTENT_EVENT: &str = "browsed_content";

/// Event name for starring content
pub const STARRED_CONTENT_EVENT: &str = "starred_content";

/// Event name for sharing content
pub const SHARED_CONTENT_EVENT: &str = "shared_content";

/// Event name for consuming content
pub const CONSUMED_CONTENT_EVENT: &str = "consumed_content";

/// Builder for media content events
///
/// # Example
///
/// ```
/// use tell_templates::MediaEvent;
///
/// let event = MediaEvent::shared("facebook", "social")
///     .unwrap()
///     .category("media-category")
///     .author("The Cool UA")
///     .feature(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(event.name(), "shared_content");
/// assert_eq!(event.property("source").unwrap().as_str(), Some("facebook"));
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct MediaEvent {
    core: EventCore,
    category: Option<String>,
    id: Option<String>,
    description: Option<String>,
    content_type: Option<String>,
    author: Option<String>,
    feature: Option<bool>,
    published_date: Option<String>,
    source: Option<String>,
    medium: Option<String>,
}

impl MediaEvent {
    fn with_name(name: &'static str) -> Self {
        Self {
            core: EventCore::new(name),
            category: None,
            id: None,
            description: None,
            content_type: None,
            author: None,
            feature: None,
            published_date: None,
            source: None,
            medium: None,
        }
    }

    /// Start a `browsed_content` event
    pub fn browsed() -> Self {
        Self::with_name(BROWSED_CONTENT_EVENT)
    }

    /// Start a `starred_content` event
    pub fn starred() -> Self {
        Self::with_name(STARRED_CONTENT_EVENT)
    }

    /// Start a `consumed_content` event, optionally carrying a value
    pub fn consumed(value: Option<EventValue>) -> Self {
        let mut event = Self::with_name(CONSUMED_CONTENT_EVENT);
        event.core = event.core.with_value(value);
        event
    }

    /// Start a `shared_content` event
    ///
    /// # Errors
    ///
    /// Returns `EmptyArgument` if `source` or `medium` is empty.
    pub fn shared(source: &str, medium: &str) -> Result<Self> {
        let source = require_non_empty("source", source)?;
        let medium = require_non_empty("medium", medium)?;

        let mut event = Self::with_name(SHARED_CONTENT_EVENT);
        event.source = Some(source);
        event.medium = Some(medium);
        Ok(event)
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

    /// Set the event value from a decimal string
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

    /// Set the content category
    #[inline]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Set the content ID
    #[inline]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set the content description
    #[inline]
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the content type (sent as `type`)
    #[inline]
    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Set the content author
    #[inline]
    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Mark the content as featured
    #[inline]
    pub fn feature(mut self, feature: bool) -> Self {
        self.feature = Some(feature);
        self
    }

    /// Set the publication date, as free text
    #[inline]
    pub fn published_date(mut self, date: &str) -> Self {
        self.published_date = Some(date.to_string());
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
        insert_opt(&mut properties, "id", self.id);
        insert_opt(&mut properties, "description", self.description);
        insert_opt(&mut properties, "type", self.content_type);
        insert_opt(&mut properties, "author", self.author);
        insert_opt(&mut properties, "feature", self.feature);
        insert_opt(&mut properties, "published_date", self.published_date);
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
