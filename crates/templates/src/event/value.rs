//! Scaled event values
//!
//! Event values travel as integers: the decimal magnitude multiplied by
//! [`VALUE_SCALE`]. Decimal strings with up to six fractional digits scale
//! exactly; `f64` input rounds half away from zero.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, TemplateError};

/// Multiplier applied to every event value
pub const VALUE_SCALE: i64 = 1_000_000;

/// Largest accepted value before scaling
pub const MAX_VALUE: i64 = i32::MAX as i64;

/// Largest accepted value after scaling
const MAX_SCALED: i64 = MAX_VALUE * VALUE_SCALE;

/// Fractional digits kept by the scale
const SCALE_DIGITS: usize = 6;

/// A non-negative event value, stored scaled by [`VALUE_SCALE`]
///
/// # Example
///
/// ```
/// use tell_templates::EventValue;
///
/// let value: EventValue = "2.99".parse().unwrap();
/// assert_eq!(value.scaled(), 2_990_000);
/// assert_eq!(value.to_string(), "2.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventValue(i64);

impl EventValue {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// Create from a floating point magnitude
    ///
    /// # Errors
    ///
    /// Returns error if the value is NaN, infinite, negative or above
    /// [`MAX_VALUE`].
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(TemplateError::NonFiniteValue);
        }
        if value < 0.0 {
            return Err(TemplateError::NegativeValue(value.to_string()));
        }
        if value > MAX_VALUE as f64 {
            return Err(TemplateError::ValueOutOfRange {
                value: value.to_string(),
                max: MAX_VALUE,
            });
        }

        Ok(Self((value * VALUE_SCALE as f64).round() as i64))
    }

    /// Create from a whole number of units
    ///
    /// # Errors
    ///
    /// Returns error if the value is negative or above [`MAX_VALUE`].
    pub fn from_units(units: i64) -> Result<Self> {
        if units < 0 {
            return Err(TemplateError::NegativeValue(units.to_string()));
        }
        if units > MAX_VALUE {
            return Err(TemplateError::ValueOutOfRange {
                value: units.to_string(),
                max: MAX_VALUE,
            });
        }
        Ok(Self(units * VALUE_SCALE))
    }

    /// Create from an already scaled integer
    ///
    /// # Errors
    ///
    /// Returns error if the scaled value is negative or above
    /// `MAX_VALUE * VALUE_SCALE`.
    pub fn from_scaled(scaled: i64) -> Result<Self> {
        if scaled < 0 {
            return Err(TemplateError::NegativeValue(Self::render(scaled)));
        }
        if scaled > MAX_SCALED {
            return Err(TemplateError::ValueOutOfRange {
                value: Self::render(scaled),
                max: MAX_VALUE,
            });
        }
        Ok(Self(scaled))
    }

    /// The scaled integer sent as `event_value`
    #[inline]
    pub const fn scaled(self) -> i64 {
        self.0
    }

    /// The magnitude as a float (lossy for very large values)
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / VALUE_SCALE as f64
    }

    fn render(scaled: i64) -> String {
        let sign = if scaled < 0 { "-" } else { "" };
        let abs = scaled.unsigned_abs();
        let scale = VALUE_SCALE as u64;
        let whole = abs / scale;
        let fraction = abs % scale;

        if fraction == 0 {
            return format!("{sign}{whole}");
        }

        let digits = format!("{fraction:0width$}", width = SCALE_DIGITS);
        format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::render(self.0))
    }
}

impl FromStr for EventValue {
    type Err = TemplateError;

    /// Parse a plain decimal such as `"123"`, `"2.99"` or `".5"`
    ///
    /// Digits past the sixth fractional place round half-up.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || TemplateError::InvalidDecimal(s.to_string());

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole_part, fraction_part) = digits.split_once('.').unwrap_or((digits, ""));
        if whole_part.is_empty() && fraction_part.is_empty() {
            return Err(invalid());
        }
        if !whole_part.bytes().all(|b| b.is_ascii_digit())
            || !fraction_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        // Saturates just above the limit so huge inputs can't overflow.
        let mut whole: i64 = 0;
        for b in whole_part.bytes() {
            whole = whole * 10 + i64::from(b - b'0');
            if whole > MAX_VALUE {
                whole = MAX_VALUE + 1;
                break;
            }
        }

        let mut fraction: i64 = 0;
        for i in 0..SCALE_DIGITS {
            let digit = fraction_part.as_bytes().get(i).map_or(0, |b| b - b'0');
            fraction = fraction * 10 + i64::from(digit);
        }
        let round_up = fraction_part
            .as_bytes()
            .get(SCALE_DIGITS)
            .is_some_and(|&b| b >= b'5');

        let scaled = whole * VALUE_SCALE + fraction + i64::from(round_up);

        if negative && scaled != 0 {
            return Err(TemplateError::NegativeValue(trimmed.to_string()));
        }
        if scaled > MAX_SCALED {
            return Err(TemplateError::ValueOutOfRange {
                value: trimmed.to_string(),
                max: MAX_VALUE,
            });
        }

        Ok(Self(scaled))
    }
}

impl TryFrom<f64> for EventValue {
    type Error = TemplateError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

impl TryFrom<i64> for EventValue {
    type Error = TemplateError;

    fn try_from(units: i64) -> Result<Self> {
        Self::from_units(units)
    }
}

impl TryFrom<&str> for EventValue {
    type Error = TemplateError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<u16> for EventValue {
    fn from(units: u16) -> Self {
        Self(i64::from(units) * VALUE_SCALE)
    }
}
