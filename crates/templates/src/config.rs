//! Event limits configuration
//!
//! Length and size limits applied when a custom event is finalized.
//! Defaults match what the collector accepts; override them from TOML.
//!
//! # Example
//!
//! ```toml
//! max_field_length = 255
//! max_properties = 100
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, TemplateError};

/// Default maximum length (in characters) of string fields
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 255;

/// Default maximum number of properties, `ltv` included
pub const DEFAULT_MAX_PROPERTIES: usize = 100;

/// Limits enforced by `build()`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventLimits {
    /// Maximum characters in `transaction_id` and each string property
    /// Default: 255
    pub max_field_length: usize,

    /// Maximum entries in the property bag
    /// Default: 100
    pub max_properties: usize,
}

impl Default for EventLimits {
    fn default() -> Self {
        Self {
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
            max_properties: DEFAULT_MAX_PROPERTIES,
        }
    }
}

impl EventLimits {
    /// Load limits from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML, or
    /// sets an unusable limit.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| TemplateError::ConfigIo {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    fn parse(s: &str) -> Result<Self> {
        let limits: EventLimits = toml::from_str(s)?;
        limits.validate()?;
        Ok(limits)
    }

    fn validate(&self) -> Result<()> {
        if self.max_field_length == 0 {
            return Err(TemplateError::InvalidLimit {
                field: "max_field_length",
                reason: "must be at least 1".to_string(),
            });
        }
        // ltv is always present
        if self.max_properties == 0 {
            return Err(TemplateError::InvalidLimit {
                field: "max_properties",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl FromStr for EventLimits {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
