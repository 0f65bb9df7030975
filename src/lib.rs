//! Basket Pricer
//!
//! Prices a basket of item codes against a catalog of multi-buy rules.
//!
//! ## Features
//! - Per-item validation with structured error reports
//! - Plain and multi-buy (N for P) pricing, bundled in arrival order
//! - Free delivery above a basket threshold
//! - Batch runner shared by the CLI prompt and the HTTP endpoint

use thiserror::Error;

pub mod api;
pub mod config;
pub mod domain;
pub mod runner;

pub use domain::aggregates::{Basket, Checkout, CheckoutState, PriceSnapshot};
pub use domain::rules::{DeliveryRule, ItemStatus, PricingRule, PricingRules, RuleSet};
pub use domain::validation::{validate, ErrorKind, ErrorReport, ItemPricing};
pub use domain::value_objects::{ItemCode, ItemCodeError, PriceChange};
pub use runner::{BasketLine, BatchRunner, CheckoutResult};

// =============================================================================
// Error Types
// =============================================================================

/// Configuration and startup failures. Per-item problems are reported through
/// [`ErrorReport`] instead and never end a session.
#[derive(Error, Debug)]
pub enum PricerError {
    #[error("Failed to read rules file {path}: {source}")]
    RulesIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed rules file: {0}")]
    RulesFormat(#[from] serde_json::Error),

    #[error("Invalid pricing rule for {code}: {reason}")]
    InvalidRule { code: String, reason: String },

    #[error("Invalid delivery rule: {0}")]
    InvalidDelivery(String),
}

pub type Result<T> = std::result::Result<T, PricerError>;
