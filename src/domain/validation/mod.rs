//! Item validation against the pricing rules
//!
//! ```text
//! code ──► in catalog? ──no──► [noPricingRules]
//!              │
//!             yes
//!              ▼
//!   price? status?           ──► noPrice / noStatus
//!              │
//!   Discountable?
//!              ▼
//!   discountFrequency? discountedPrice?  ──► noDiscountFrequency / noDiscountedPrice
//! ```
//!
//! All applicable kinds are collected into one report. A record that passes is
//! turned into an [`ItemPricing`], so the basket never looks at optional fields.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::num::NonZeroU32;
use thiserror::Error;

use crate::domain::rules::{ItemStatus, PricingRule, PricingRules};
use crate::domain::value_objects::ItemCode;

/// Per-item validation failure. The display text is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("ERROR: An item was passed that has not been included in the pricing rules.")]
    NoPricingRules,
    #[error("ERROR: An item was passed without a price property.")]
    NoPrice,
    #[error("ERROR: An item was passed without a status property.")]
    NoStatus,
    #[error("ERROR: A discountable item was passed without a discountFrequency property.")]
    NoDiscountFrequency,
    #[error("ERROR: A discountable item was passed without a discountedPrice property.")]
    NoDiscountedPrice,
}

impl ErrorKind {
    /// Stable identifier used as the key in serialized reports.
    pub fn id(&self) -> &'static str {
        match self {
            Self::NoPricingRules => "noPricingRules",
            Self::NoPrice => "noPrice",
            Self::NoStatus => "noStatus",
            Self::NoDiscountFrequency => "noDiscountFrequency",
            Self::NoDiscountedPrice => "noDiscountedPrice",
        }
    }
}

/// Ordered set of validation failures for one item code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorReport(Vec<ErrorKind>);

impl ErrorReport {
    fn push(&mut self, kind: ErrorKind) {
        if !self.0.contains(&kind) { self.0.push(kind); }
    }
    pub fn kinds(&self) -> &[ErrorKind] { &self.0 }
    pub fn contains(&self, kind: ErrorKind) -> bool { self.0.contains(&kind) }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.0.iter().map(ErrorKind::id).collect();
        write!(f, "{}", ids.join(", "))
    }
}

impl std::error::Error for ErrorReport {}

/// Serializes as `{ "<id>": "<message>", ... }` in report order.
impl Serialize for ErrorReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for kind in &self.0 {
            map.serialize_entry(kind.id(), &kind.to_string())?;
        }
        map.end()
    }
}

/// A pricing rule that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPricing {
    Plain { unit_price: Decimal },
    MultiBuy { unit_price: Decimal, frequency: NonZeroU32, bundle_price: Decimal },
}

impl ItemPricing {
    pub fn unit_price(&self) -> Decimal {
        match self {
            Self::Plain { unit_price } | Self::MultiBuy { unit_price, .. } => *unit_price,
        }
    }
}

/// Checks `code` against the catalog.
pub fn validate(code: &ItemCode, rules: &PricingRules) -> Result<ItemPricing, ErrorReport> {
    let Some(rule) = rules.get(code) else {
        let mut report = ErrorReport::default();
        report.push(ErrorKind::NoPricingRules);
        return Err(report);
    };
    validate_rule(rule)
}

fn validate_rule(rule: &PricingRule) -> Result<ItemPricing, ErrorReport> {
    let mut report = ErrorReport::default();
    if rule.price.is_none() { report.push(ErrorKind::NoPrice); }
    if rule.status.is_none() { report.push(ErrorKind::NoStatus); }
    if rule.is_discountable() {
        if rule.discount_frequency.is_none() { report.push(ErrorKind::NoDiscountFrequency); }
        if rule.discounted_price.is_none() { report.push(ErrorKind::NoDiscountedPrice); }
    }

    match (rule.price, rule.status, rule.discount_frequency, rule.discounted_price) {
        (Some(unit_price), Some(ItemStatus::NotDiscountable), _, _) if report.is_empty() => {
            Ok(ItemPricing::Plain { unit_price })
        }
        (Some(unit_price), Some(ItemStatus::Discountable), Some(frequency), Some(bundle_price)) if report.is_empty() => {
            Ok(ItemPricing::MultiBuy { unit_price, frequency, bundle_price })
        }
        _ => Err(report),
    }
}
