//! Delivery charge

use rust_decimal::Decimal;

use crate::domain::rules::DeliveryRule;

/// Free at or above the threshold, the standard charge below it.
pub fn calculate_charge(total: Decimal, rule: &DeliveryRule) -> Decimal {
    if total >= rule.free_threshold { Decimal::ZERO } else { rule.standard }
}
