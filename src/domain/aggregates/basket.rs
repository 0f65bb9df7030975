//! Basket Aggregate

use std::collections::BTreeMap;

use crate::domain::aggregates::item::{ItemLine, Priceable, PriceableItem};
use crate::domain::validation::ItemPricing;
use crate::domain::value_objects::{ItemCode, PriceChange};

/// At most one [`PriceableItem`] per code. Items are never removed.
#[derive(Clone, Debug, Default)]
pub struct Basket {
    items: BTreeMap<ItemCode, PriceableItem>,
}

impl Basket {
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn item_count(&self) -> usize { self.items.len() }
    pub fn get(&self, code: &ItemCode) -> Option<&PriceableItem> { self.items.get(code) }

    /// Adds one unit of `code`. The pricing must come from the validator; the
    /// variant is fixed the first time a code is seen.
    pub fn add_item(&mut self, code: &ItemCode, pricing: &ItemPricing) -> PriceChange {
        self.items
            .entry(code.clone())
            .or_insert_with(|| PriceableItem::from_pricing(pricing))
            .add_unit()
    }

    pub fn lines(&self) -> impl Iterator<Item = ItemLine<'_>> {
        self.items.iter().map(|(code, item)| ItemLine {
            code,
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            savings: item.savings(),
            total_price: item.total_price(),
        })
    }
}
