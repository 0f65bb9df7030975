//! Checkout Aggregate
//!
//! One checkout per basket. Holds the rule set by `Arc` so many sessions can
//! share one immutable catalog.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::aggregates::basket::Basket;
use crate::domain::delivery::calculate_charge;
use crate::domain::rules::RuleSet;
use crate::domain::validation::{validate, ErrorReport};
use crate::domain::value_objects::{ItemCode, PriceChange};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceSnapshot {
    pub total: Decimal,
    pub savings: Decimal,
    pub delivery_charge: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutState { Empty, Active }

#[derive(Clone, Debug)]
pub struct Checkout {
    id: Uuid,
    rules: Arc<RuleSet>,
    basket: Basket,
    price: PriceSnapshot,
}

impl Checkout {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { id: Uuid::new_v4(), rules, basket: Basket::new(), price: PriceSnapshot::default() }
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn basket(&self) -> &Basket { &self.basket }

    pub fn state(&self) -> CheckoutState {
        if self.basket.is_empty() { CheckoutState::Empty } else { CheckoutState::Active }
    }

    /// Validates and adds one unit of `code`. A rejected code leaves the basket
    /// and the snapshot untouched.
    pub fn add_to_basket(&mut self, code: &ItemCode) -> Result<PriceChange, ErrorReport> {
        let pricing = match validate(code, &self.rules.pricing_rules) {
            Ok(pricing) => pricing,
            Err(report) => {
                tracing::debug!(checkout = %self.id, item = %code, errors = %report, "item rejected");
                return Err(report);
            }
        };
        let previous = self.state();
        let change = self.basket.add_item(code, &pricing);
        self.price.total += change.price_change;
        self.price.savings += change.savings_change;
        self.price.delivery_charge = calculate_charge(self.price.total, &self.rules.delivery_rules);
        tracing::debug!(
            checkout = %self.id, item = %code,
            price_change = %change.price_change, savings_change = %change.savings_change,
            total = %self.price.total, "item added"
        );
        if previous != self.state() {
            tracing::debug!(checkout = %self.id, from = ?previous, to = ?self.state(), "checkout state changed");
        }
        Ok(change)
    }

    pub fn calculate_total_price(&self) -> PriceSnapshot { self.price }
}
