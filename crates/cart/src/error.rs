//! Cart operation errors.
//!
//! Every variant is rejected-with-no-state-change; persistence failures are
//! not represented here because they are absorbed at the store boundary.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by cart operations.
#[derive(Debug, Clone, Error)]
pub enum CartError {
    /// A non-positive price was supplied to `add_item`.
    #[error("price must be above zero, got {0}")]
    InvalidPrice(Decimal),

    /// An order message was requested for a cart with no items.
    #[error("the cart is empty")]
    EmptyCart,
}
