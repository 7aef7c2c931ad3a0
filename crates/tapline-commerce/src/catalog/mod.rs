//! Product catalog module.
//!
//! Typed product records produced from the wholesale catalog feed.
//! A catalog snapshot is recreated wholesale on each fetch and treated
//! as read-only for the rest of the ordering session.

mod product;

pub use product::{Product, ProductKind, StockLevel};
