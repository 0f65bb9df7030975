//! Value Objects for basket pricing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Item code value object. Trimmed and upper-cased on construction.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ItemCode(String);

impl ItemCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ItemCodeError> {
        let value = value.into().trim().to_uppercase();
        if value.is_empty() { return Err(ItemCodeError::Empty); }
        if value.len() > 50 { return Err(ItemCodeError::TooLong); }
        Ok(Self(value))
    }

    /// Single-character code taken verbatim apart from case, so whitespace
    /// stays a (never catalogued) code of its own.
    pub fn from_char(c: char) -> Self { Self(c.to_uppercase().collect()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for ItemCode {
    type Error = ItemCodeError;
    fn try_from(value: String) -> Result<Self, Self::Error> { Self::new(value) }
}

impl TryFrom<&str> for ItemCode {
    type Error = ItemCodeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> { Self::new(value) }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemCodeError {
    #[error("item code is empty")]
    Empty,
    #[error("item code is longer than 50 characters")]
    TooLong,
}

/// Effect of adding one unit to the basket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub price_change: Decimal,
    pub savings_change: Decimal,
}

impl PriceChange {
    pub fn new(price_change: Decimal, savings_change: Decimal) -> Self { Self { price_change, savings_change } }
}
