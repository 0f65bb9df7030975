//! Batch runner: feeds a sequence of codes into one checkout and builds the
//! combined result returned by the CLI and the HTTP endpoint.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::aggregates::{Checkout, PriceSnapshot};
use crate::domain::validation::ErrorReport;
use crate::domain::value_objects::ItemCode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketLine {
    pub quantity: u32,
    pub unit_price: Decimal,
    pub item_savings: Decimal,
    pub final_cost: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckoutResult {
    #[serde(flatten)]
    pub price: PriceSnapshot,
    pub basket: BTreeMap<ItemCode, BasketLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<ItemCode, ErrorReport>>,
}

pub struct BatchRunner {
    checkout: Checkout,
    errors: BTreeMap<ItemCode, ErrorReport>,
}

impl BatchRunner {
    pub fn new(checkout: Checkout) -> Self { Self { checkout, errors: BTreeMap::new() } }

    /// One code per character. Every character is submitted, whitespace included.
    pub fn run_str(mut self, items: &str) -> CheckoutResult {
        let mut submitted = 0usize;
        for c in items.chars() {
            submitted += 1;
            self.submit(ItemCode::from_char(c));
        }
        self.report(submitted)
    }

    /// Multi-character codes. Blank codes cannot name an item and are skipped.
    pub fn run<'a>(mut self, codes: impl IntoIterator<Item = &'a str>) -> CheckoutResult {
        let mut submitted = 0usize;
        for raw in codes {
            let Ok(code) = ItemCode::new(raw) else {
                tracing::debug!(checkout = %self.checkout.id(), raw, "skipping blank item code");
                continue;
            };
            submitted += 1;
            self.submit(code);
        }
        self.report(submitted)
    }

    fn submit(&mut self, code: ItemCode) {
        if let Err(report) = self.checkout.add_to_basket(&code) {
            self.errors.entry(code).or_insert(report);
        }
    }

    fn report(&self, submitted: usize) -> CheckoutResult {
        let result = self.finish();
        tracing::info!(
            checkout = %self.checkout.id(), submitted, lines = result.basket.len(),
            rejected = self.errors.len(), total = %result.price.total, "basket priced"
        );
        result
    }

    fn finish(&self) -> CheckoutResult {
        let basket = self
            .checkout
            .basket()
            .lines()
            .map(|line| {
                let entry = BasketLine {
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    item_savings: line.savings,
                    final_cost: line.total_price,
                };
                (line.code.clone(), entry)
            })
            .collect();
        let errors = if self.errors.is_empty() { None } else { Some(self.errors.clone()) };
        CheckoutResult { price: self.checkout.calculate_total_price(), basket, errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::RuleSet;
    use crate::domain::validation::ErrorKind;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn run(items: &str) -> CheckoutResult {
        BatchRunner::new(Checkout::new(Arc::new(RuleSet::default()))).run_str(items)
    }

    fn code(c: &str) -> ItemCode { ItemCode::new(c).unwrap() }

    #[test]
    fn test_breakdown() {
        let result = run("ABBCCC");
        assert_eq!(result.price.total, dec!(38));
        assert_eq!(result.basket.len(), 3);
        assert_eq!(
            result.basket[&code("B")],
            BasketLine { quantity: 2, unit_price: dec!(12), item_savings: dec!(4), final_cost: dec!(20) }
        );
        assert!(result.errors.is_none());
    }

    #[test]
    fn test_first_error_per_code_wins() {
        let result = run("ZAZ Y");
        let errors = result.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors[&code("Z")].contains(ErrorKind::NoPricingRules));
        assert_eq!(result.price.total, dec!(8));
        assert_eq!(result.basket.len(), 1);
    }

    #[test]
    fn test_lowercase_codes() {
        let result = run("bb");
        assert_eq!(result.price.total, dec!(20));
        assert_eq!(result.price.savings, dec!(4));
    }

    #[test]
    fn test_space_is_an_unknown_item() {
        let result = run("A B");
        assert_eq!(result.price.total, dec!(20));
        let errors = result.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&ItemCode::from_char(' ')].kinds(), &[ErrorKind::NoPricingRules]);

        let json = serde_json::to_value(run("A B")).unwrap();
        assert!(json["Errors"][" "]["noPricingRules"].is_string());
    }

    #[test]
    fn test_run_skips_blank_codes() {
        let result = BatchRunner::new(Checkout::new(Arc::new(RuleSet::default()))).run(["A", "  ", "b"]);
        assert_eq!(result.price.total, dec!(20));
        assert!(result.errors.is_none());
    }

    #[test]
    fn test_empty_submission() {
        let result = run("");
        assert_eq!(result.price, PriceSnapshot::default());
        assert!(result.basket.is_empty());
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(run("BBZ")).unwrap();
        assert_eq!(json["Total"].as_f64(), Some(20.0));
        assert_eq!(json["DeliveryCharge"].as_f64(), Some(7.0));
        assert_eq!(json["Basket"]["B"]["quantity"], 2);
        assert_eq!(json["Basket"]["B"]["finalCost"].as_f64(), Some(20.0));
        assert_eq!(json["Basket"]["B"]["itemSavings"].as_f64(), Some(4.0));
        assert!(json["Errors"]["Z"]["noPricingRules"].is_string());

        let json = serde_json::to_value(run("A")).unwrap();
        assert!(json.get("Errors").is_none());
    }
}
