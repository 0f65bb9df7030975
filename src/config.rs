//! Rule-set loading
//!
//! Rules come from a JSON file when a path is configured, otherwise the
//! built-in catalog is used:
//!
//! ```json
//! {
//!   "pricingRules": { "A": { "price": 8, "status": "notDiscountable" } },
//!   "deliveryRules": { "standard": 7, "freeThreshold": 50 }
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::domain::rules::RuleSet;
use crate::{PricerError, Result};

pub fn parse_rules(json: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_json::from_str(json)?;
    rules.check()?;
    Ok(rules)
}

pub fn load_rules_file(path: &Path) -> Result<RuleSet> {
    let json = std::fs::read_to_string(path)
        .map_err(|source| PricerError::RulesIo { path: path.display().to_string(), source })?;
    parse_rules(&json)
}

/// Loads `path` if given, else the default catalog.
pub fn load_rules(path: Option<&Path>) -> Result<Arc<RuleSet>> {
    let rules = match path {
        Some(path) => {
            let rules = load_rules_file(path)?;
            tracing::info!(path = %path.display(), items = rules.pricing_rules.len(), "loaded pricing rules");
            rules
        }
        None => {
            tracing::info!("using built-in pricing rules");
            RuleSet::default()
        }
    };
    Ok(Arc::new(rules))
}
