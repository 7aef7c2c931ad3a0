//! Cart module.
//!
//! Turns per-product quantity selections into validated line items.

mod builder;
mod line_item;

pub use builder::{CartBuilder, StockPolicy};
pub use line_item::LineItem;
