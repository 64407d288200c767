//! Product identifiers.
//!
//! Product ids are small positive integers. Ids arriving from markup
//! attributes or persisted object keys are text, so parsing follows integer
//! coercion: surrounding noise after the leading digits is ignored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// A catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an ID from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Coerce text to an id.
    ///
    /// Leading whitespace and a `+` sign are accepted, then the leading run
    /// of decimal digits is taken and anything after it is ignored
    /// (`" 12abc"` → 12). Returns `None` when there are no leading digits,
    /// the value is zero or negative, or it doesn't fit.
    pub fn coerce(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_end];
        if digits.is_empty() {
            return None;
        }
        match digits.parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(Self(n)),
        }
    }
}

impl FromStr for ProductId {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::coerce(s).ok_or_else(|| CommerceError::InvalidProductId(s.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
