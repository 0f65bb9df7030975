//! Pricing domain: rules, validation, per-item accumulators and the checkout.
//!
//! Nothing in here performs I/O. Rule files are read by [`crate::config`].
pub mod aggregates;
pub mod delivery;
pub mod rules;
pub mod validation;
pub mod value_objects;
