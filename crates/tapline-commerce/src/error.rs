//! Domain error types.

use thiserror::Error;

/// Errors that can occur while building or pricing an order.
///
/// Every variant is user-correctable or retryable; nothing here is
/// fatal to the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    /// No line items survived cart building. The caller should
    /// re-prompt rather than price an empty order.
    #[error("Cart is empty: select at least one product")]
    EmptyCart,

    /// A requested quantity exceeds the known stock level.
    #[error("Stock exceeded for {product}: requested {requested}, available {available}")]
    StockExceeded {
        product: String,
        requested: i64,
        available: i64,
    },

    /// A requested quantity is negative.
    #[error("Invalid quantity {quantity} for {product}")]
    InvalidQuantity { product: String, quantity: i64 },

    /// Currency mismatch between line items or configuration.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid ordering-session step transition.
    #[error("Invalid session transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A session operation ran in the wrong step.
    #[error("Session step {step} does not allow {operation}")]
    WrongStep { step: String, operation: String },
}
