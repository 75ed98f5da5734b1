//! Error types for the event templates
//!
//! Provides structured errors for value, builder, tracker and limits failures.

use std::io;

use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Broad classification of a [`TemplateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied argument was missing, empty or out of range
    InvalidArgument,
    /// A value could not be rendered as JSON
    Serialization,
    /// The tracker refused the finished event
    Tracker,
    /// Limits configuration could not be loaded
    Config,
}

/// Errors that can occur when building or tracking custom events
#[derive(Debug, Error)]
pub enum TemplateError {
    // =========================================================================
    // Argument errors
    // =========================================================================
    /// Required construction parameter is empty or blank
    #[error("{field} must not be empty")]
    EmptyArgument {
        /// Parameter name (source, medium)
        field: &'static str,
    },

    /// Event value is below zero
    #[error("event value must not be negative, got {0}")]
    NegativeValue(String),

    /// Event value exceeds the representable range
    #[error("event value {value} exceeds maximum {max}")]
    ValueOutOfRange {
        /// Value as supplied by the caller
        value: String,
        /// Maximum allowed unscaled value
        max: i64,
    },

    /// Event value is NaN or infinite
    #[error("event value must be a finite number")]
    NonFiniteValue,

    /// Event value string is not a plain decimal number
    #[error("invalid decimal value '{0}'")]
    InvalidDecimal(String),

    /// String field exceeds the configured length limit
    #[error("{field} too long: {len} characters exceeds maximum {max} characters")]
    FieldTooLong {
        /// Field or property name
        field: String,
        /// Actual length in characters
        len: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Property bag exceeds the configured size limit
    #[error("too many properties: {count} exceeds maximum {max}")]
    TooManyProperties {
        /// Number of properties, ltv included
        count: usize,
        /// Maximum allowed
        max: usize,
    },

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Property number has no JSON representation
    #[error("property number must be finite")]
    NonFiniteNumber,

    /// JSON rendering failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // =========================================================================
    // Tracker errors
    // =========================================================================
    /// Tracker rejected the event
    #[error("tracker error: {0}")]
    Tracker(String),

    // =========================================================================
    // Limits configuration errors
    // =========================================================================
    /// Failed to read limits file
    #[error("failed to read limits file '{path}': {source}")]
    ConfigIo {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse limits TOML
    #[error("failed to parse limits: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Limit value is unusable
    #[error("invalid limit '{field}': {reason}")]
    InvalidLimit {
        /// Limit name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl TemplateError {
    /// Create a FieldTooLong error
    pub fn field_too_long(field: impl Into<String>, len: usize, max: usize) -> Self {
        Self::FieldTooLong {
            field: field.into(),
            len,
            max,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyArgument { .. }
            | Self::NegativeValue(_)
            | Self::ValueOutOfRange { .. }
            | Self::NonFiniteValue
            | Self::InvalidDecimal(_)
            | Self::FieldTooLong { .. }
            | Self::TooManyProperties { .. } => ErrorKind::InvalidArgument,
            Self::NonFiniteNumber | Self::Serialization(_) => ErrorKind::Serialization,
            Self::Tracker(_) => ErrorKind::Tracker,
            Self::ConfigIo { .. } | Self::ConfigParse(_) | Self::InvalidLimit { .. } => {
                ErrorKind::Config
            }
        }
    }

    /// Check if this is an invalid argument error
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
