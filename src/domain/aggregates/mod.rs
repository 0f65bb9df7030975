//! Aggregates module
pub mod item;
pub mod basket;
pub mod checkout;

pub use item::{ItemLine, MultiBuyItem, PlainItem, Priceable, PriceableItem};
pub use basket::Basket;
pub use checkout::{Checkout, CheckoutState, PriceSnapshot};
