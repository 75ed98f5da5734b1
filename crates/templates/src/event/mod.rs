//! Event module - custom event record and property model
//!
//! Holds the finalized [`CustomEvent`], its scaled [`EventValue`] and the
//! typed [`PropertyValue`] bag shared by every template family.

mod builder;
mod record;
mod types;
mod value;


pub(crate) use builder::{EventCore, require_non_empty};
pub(crate) use types::insert_opt;

pub use record::{CustomEvent, LTV_PROPERTY};
pub use types::{Properties, PropertyValue};
pub use value::{EventValue, MAX_VALUE, VALUE_SCALE};
