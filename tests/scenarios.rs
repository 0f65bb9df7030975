use basket_pricer::{config, BatchRunner, Checkout, CheckoutResult, ErrorKind, ItemCode, PriceSnapshot, RuleSet};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn alternative() -> Arc<RuleSet> {
    Arc::new(config::parse_rules(include_str!("../config/alternative_rules.json")).unwrap())
}

fn price_with(rules: Arc<RuleSet>, items: &str) -> CheckoutResult {
    BatchRunner::new(Checkout::new(rules)).run_str(items)
}

fn price(items: &str) -> CheckoutResult {
    price_with(Arc::new(RuleSet::default()), items)
}

fn snapshot(total: Decimal, savings: Decimal, delivery_charge: Decimal) -> PriceSnapshot {
    PriceSnapshot { total, savings, delivery_charge }
}

#[test]
fn test_empty_basket() {
    assert_eq!(price("").price, snapshot(dec!(0), dec!(0), dec!(0)));
}

#[test]
fn test_without_discounts() {
    assert_eq!(price("A").price, snapshot(dec!(8), dec!(0), dec!(7)));
    assert_eq!(price("AAAA").price, snapshot(dec!(32), dec!(0), dec!(7)));
    assert_eq!(price("B").price, snapshot(dec!(12), dec!(0), dec!(7)));
    assert_eq!(price("EE").price, snapshot(dec!(10), dec!(0), dec!(7)));
    assert_eq!(price_with(alternative(), "FFF").price, snapshot(dec!(45), dec!(0), dec!(0)));
    assert_eq!(price_with(alternative(), "GGGG").price, snapshot(dec!(40), dec!(0), dec!(25)));
    assert_eq!(price_with(alternative(), &"H".repeat(12)).price.total, dec!(12));
}

#[test]
fn test_with_discounts() {
    assert_eq!(price("BB").price, snapshot(dec!(20), dec!(4), dec!(7)));
    assert_eq!(price("CCC").price, snapshot(dec!(10), dec!(2), dec!(7)));
    assert_eq!(price(&"D".repeat(14)).price, snapshot(dec!(49), dec!(49), dec!(7)));
    assert_eq!(price("EEE").price, snapshot(dec!(10), dec!(5), dec!(7)));
    assert_eq!(price("EEEE").price, snapshot(dec!(15), dec!(5), dec!(7)));
    assert_eq!(price("BBBBCCC").price, snapshot(dec!(50), dec!(10), dec!(0)));
    assert_eq!(price_with(alternative(), "GGGGG").price, snapshot(dec!(40), dec!(10), dec!(25)));
    assert_eq!(price_with(alternative(), &"H".repeat(30)).price, snapshot(dec!(20), dec!(10), dec!(25)));
}

#[test]
fn test_mixed_basket_in_any_order() {
    let grouped = price("ABBCCCDDEE");
    assert_eq!(grouped.price, snapshot(dec!(55), dec!(13), dec!(0)));
    let shuffled = price("EDCBAEDCBC");
    assert_eq!(shuffled.price, grouped.price);
    assert_eq!(shuffled.basket, grouped.basket);
}

#[test]
fn test_interleaving_other_codes() {
    let interleaved = price("BCB");
    let grouped = price("BBC");
    assert_eq!(interleaved, grouped);
    assert_eq!(interleaved.basket[&ItemCode::new("B").unwrap()].item_savings, dec!(4));
}

#[test]
fn test_free_delivery_boundary() {
    assert_eq!(price_with(alternative(), "GGGGGG").price.delivery_charge, dec!(0));
    assert_eq!(price_with(alternative(), "F").price.delivery_charge, dec!(25));
    // 45 exactly
    assert_eq!(price_with(alternative(), "FFF").price.delivery_charge, dec!(0));
}

#[test]
fn test_invalid_items() {
    let result = price("Z");
    assert_eq!(result.price.total, dec!(0));
    let errors = result.errors.unwrap();
    assert_eq!(errors[&ItemCode::new("Z").unwrap()].kinds(), &[ErrorKind::NoPricingRules]);

    let result = price_with(alternative(), "IJF");
    let errors = result.errors.unwrap();
    assert_eq!(errors[&ItemCode::new("I").unwrap()].kinds(), &[ErrorKind::NoStatus]);
    assert_eq!(errors[&ItemCode::new("J").unwrap()].kinds(), &[ErrorKind::NoDiscountedPrice]);
    assert_eq!(result.price, snapshot(dec!(15), dec!(0), dec!(25)));
}

#[test]
fn test_results_are_non_negative() {
    let result = price("ABCDEABCDEABCDEZZ");
    let zero = Decimal::ZERO;
    assert!(result.price.total >= zero && result.price.savings >= zero && result.price.delivery_charge >= zero);
    for line in result.basket.values() {
        assert!(line.final_cost >= zero);
        assert!(line.item_savings >= zero);
    }
}

#[test]
fn test_repeatable() {
    let rules = Arc::new(RuleSet::default());
    let first = price_with(Arc::clone(&rules), "ABBCCCDDEEZ");
    let _other = price_with(Arc::clone(&rules), "BBBB");
    let second = price_with(rules, "ABBCCCDDEEZ");
    assert_eq!(first, second);
}
