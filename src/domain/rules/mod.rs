//! Pricing and delivery rules
//!
//! The rule set is plain data: every field of a [`PricingRule`] is optional so a
//! malformed record can still be loaded and then reported against the item that
//! uses it, rather than failing the whole catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

use crate::domain::value_objects::ItemCode;
use crate::{PricerError, Result};

/// Largest price, bundle price or delivery amount a rule set may carry. Keeps
/// running totals well inside `Decimal` range for any realistic basket.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Catalog of pricing rules keyed by item code.
pub type PricingRules = BTreeMap<ItemCode, PricingRule>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    #[serde(rename = "notDiscountable")]
    NotDiscountable,
    #[serde(rename = "Discountable")]
    Discountable,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    /// Number of units that make up one discount bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_frequency: Option<NonZeroU32>,
    /// Price of a whole bundle, not of a single unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<Decimal>,
}

impl PricingRule {
    pub fn plain(price: Decimal) -> Self {
        Self { price: Some(price), status: Some(ItemStatus::NotDiscountable), ..Self::default() }
    }

    /// A frequency of zero is stored as absent.
    pub fn multi_buy(price: Decimal, frequency: u32, bundle_price: Decimal) -> Self {
        Self {
            price: Some(price),
            status: Some(ItemStatus::Discountable),
            discount_frequency: NonZeroU32::new(frequency),
            discounted_price: Some(bundle_price),
        }
    }

    pub fn is_discountable(&self) -> bool { self.status == Some(ItemStatus::Discountable) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRule {
    pub standard: Decimal,
    pub free_threshold: Decimal,
}

impl DeliveryRule {
    pub fn new(standard: Decimal, free_threshold: Decimal) -> Self { Self { standard, free_threshold } }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub pricing_rules: PricingRules,
    pub delivery_rules: DeliveryRule,
}

impl RuleSet {
    pub fn new(pricing_rules: PricingRules, delivery_rules: DeliveryRule) -> Self {
        Self { pricing_rules, delivery_rules }
    }

    /// Rejects negative amounts and amounts above [`MAX_AMOUNT`]. Missing fields
    /// are left for the item validator.
    pub fn check(&self) -> Result<()> {
        for (code, rule) in &self.pricing_rules {
            let invalid = |reason: String| PricerError::InvalidRule { code: code.to_string(), reason };
            if let Some(price) = rule.price {
                check_amount("price", price).map_err(invalid)?;
            }
            if let Some(bundle_price) = rule.discounted_price {
                check_amount("discountedPrice", bundle_price).map_err(invalid)?;
            }
        }
        let delivery = &self.delivery_rules;
        check_amount("standard", delivery.standard).map_err(PricerError::InvalidDelivery)?;
        check_amount("freeThreshold", delivery.free_threshold).map_err(PricerError::InvalidDelivery)?;
        Ok(())
    }
}

fn check_amount(field: &str, amount: Decimal) -> std::result::Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("{} is negative", field));
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(format!("{} exceeds {}", field, MAX_AMOUNT));
    }
    Ok(())
}

impl Default for RuleSet {
    /// A=8; B=12, 2 for 20; C=4, 3 for 10; D=7, 2 for 7; E=5, 3 for 10.
    /// Delivery 7, free from 50.
    fn default() -> Self {
        let rules = [
            ("A", PricingRule::plain(Decimal::new(8, 0))),
            ("B", PricingRule::multi_buy(Decimal::new(12, 0), 2, Decimal::new(20, 0))),
            ("C", PricingRule::multi_buy(Decimal::new(4, 0), 3, Decimal::new(10, 0))),
            ("D", PricingRule::multi_buy(Decimal::new(7, 0), 2, Decimal::new(7, 0))),
            ("E", PricingRule::multi_buy(Decimal::new(5, 0), 3, Decimal::new(10, 0))),
        ];
        let pricing_rules = rules
            .into_iter()
            .filter_map(|(code, rule)| ItemCode::new(code).ok().map(|code| (code, rule)))
            .collect();
        Self::new(pricing_rules, DeliveryRule::new(Decimal::new(7, 0), Decimal::new(50, 0)))
    }
}
