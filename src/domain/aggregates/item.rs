//! Priceable items
//!
//! One accumulator per distinct item code in a basket. Multi-buy items price
//! contiguous bundles of `frequency` units in arrival order: every time the
//! counter reaches the frequency, the last `frequency` full-price units are
//! swapped for the bundle price.

use rust_decimal::Decimal;
use std::num::NonZeroU32;

use crate::domain::validation::ItemPricing;
use crate::domain::value_objects::{ItemCode, PriceChange};

/// Shared contract of every item variant.
pub trait Priceable {
    /// Registers one more unit and returns what it did to price and savings.
    fn add_unit(&mut self) -> PriceChange;
    fn quantity(&self) -> u32;
    fn unit_price(&self) -> Decimal;
    fn total_price(&self) -> Decimal;
    fn savings(&self) -> Decimal;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainItem {
    quantity: u32,
    unit_price: Decimal,
    total_price: Decimal,
}

impl PlainItem {
    pub fn new(unit_price: Decimal) -> Self { Self { quantity: 0, unit_price, total_price: Decimal::ZERO } }
}

impl Priceable for PlainItem {
    fn add_unit(&mut self) -> PriceChange {
        self.quantity += 1;
        self.total_price += self.unit_price;
        PriceChange::new(self.unit_price, Decimal::ZERO)
    }
    fn quantity(&self) -> u32 { self.quantity }
    fn unit_price(&self) -> Decimal { self.unit_price }
    fn total_price(&self) -> Decimal { self.total_price }
    fn savings(&self) -> Decimal { Decimal::ZERO }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiBuyItem {
    quantity: u32,
    unit_price: Decimal,
    total_price: Decimal,
    savings: Decimal,
    frequency: NonZeroU32,
    bundle_price: Decimal,
    /// Units since the last completed bundle; always below `frequency`.
    counter: u32,
}

impl MultiBuyItem {
    pub fn new(unit_price: Decimal, frequency: NonZeroU32, bundle_price: Decimal) -> Self {
        Self { quantity: 0, unit_price, total_price: Decimal::ZERO, savings: Decimal::ZERO, frequency, bundle_price, counter: 0 }
    }

    pub fn counter(&self) -> u32 { self.counter }

    fn apply_discount(&mut self) {
        self.counter += 1;
        if self.counter == self.frequency.get() {
            self.counter = 0;
            let full_price = self.unit_price * Decimal::from(self.frequency.get());
            self.total_price -= full_price;
            self.total_price += self.bundle_price;
            self.savings += full_price - self.bundle_price;
        }
    }
}

impl Priceable for MultiBuyItem {
    fn add_unit(&mut self) -> PriceChange {
        let previous_total = self.total_price;
        let previous_savings = self.savings;
        self.quantity += 1;
        self.total_price += self.unit_price;
        self.apply_discount();
        PriceChange::new(self.total_price - previous_total, self.savings - previous_savings)
    }
    fn quantity(&self) -> u32 { self.quantity }
    fn unit_price(&self) -> Decimal { self.unit_price }
    fn total_price(&self) -> Decimal { self.total_price }
    fn savings(&self) -> Decimal { self.savings }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PriceableItem {
    Plain(PlainItem),
    MultiBuy(MultiBuyItem),
}

impl PriceableItem {
    pub fn from_pricing(pricing: &ItemPricing) -> Self {
        match *pricing {
            ItemPricing::Plain { unit_price } => Self::Plain(PlainItem::new(unit_price)),
            ItemPricing::MultiBuy { unit_price, frequency, bundle_price } => {
                Self::MultiBuy(MultiBuyItem::new(unit_price, frequency, bundle_price))
            }
        }
    }

    fn inner(&self) -> &dyn Priceable {
        match self { Self::Plain(i) => i, Self::MultiBuy(i) => i }
    }
}

impl Priceable for PriceableItem {
    fn add_unit(&mut self) -> PriceChange {
        match self { Self::Plain(i) => i.add_unit(), Self::MultiBuy(i) => i.add_unit() }
    }
    fn quantity(&self) -> u32 { self.inner().quantity() }
    fn unit_price(&self) -> Decimal { self.inner().unit_price() }
    fn total_price(&self) -> Decimal { self.inner().total_price() }
    fn savings(&self) -> Decimal { self.inner().savings() }
}

/// Per-item view used for basket breakdowns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemLine<'a> {
    pub code: &'a ItemCode,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub savings: Decimal,
    pub total_price: Decimal,
}
