//! Money types for API boundary enforcement
//!
//! `StrictDecimal` is a format-validated input type: JSON amounts must be
//! strings so that binary floating point never enters the system. Business
//! validation (positivity) is NOT done here - the transfer coordinator owns
//! it and reports `InvalidAmount` from its error taxonomy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strict format Decimal - validates format during deserialization
///
/// Accepted: `"1.5"`, `"0.5"`, `"200"`, `"-100.0"` (sign checked later).
/// Rejected:
/// - JSON numbers (must be strings)
/// - `.5` (must be `0.5`)
/// - `5.` (must be `5.0` or `5`)
/// - scientific notation (`1.5e8`)
/// - `+` prefix
/// - empty strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl std::ops::Deref for StrictDecimal {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Decimal> for StrictDecimal {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Only accept JSON strings for strict format control.
        // JSON numbers arrive as binary floats, so we reject them.
        let s = String::deserialize(deserializer)?;

        if s.is_empty() {
            return Err(D::Error::custom("Amount cannot be empty"));
        }

        let digits = s.strip_prefix('-').unwrap_or(&s);

        if digits.starts_with('.') {
            return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
        }

        if digits.ends_with('.') {
            return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
        }

        if s.contains('e') || s.contains('E') {
            return Err(D::Error::custom(
                "Invalid format: scientific notation not allowed",
            ));
        }

        if s.starts_with('+') {
            return Err(D::Error::custom("Invalid format: + prefix not allowed"));
        }

        let d = Decimal::from_str(&s)
            .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;

        Ok(StrictDecimal(d))
    }
}

impl Serialize for StrictDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}
