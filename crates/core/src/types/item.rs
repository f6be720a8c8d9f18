//! A single cart line.

use chrono::{DateTime, Utc};

use super::id::ItemId;
use super::name::ItemName;
use super::price::Price;

/// One unit of a product in the cart.
///
/// The same product added twice yields two distinct `Item`s with distinct
/// IDs; there is no quantity field, each unit occupies one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique within the cart's lifetime.
    pub id: ItemId,
    /// Product label shown in the cart and the order message.
    pub name: ItemName,
    /// Price of this single unit.
    pub unit_price: Price,
    /// When the item entered the cart.
    pub added_at: DateTime<Utc>,
}

impl Item {
    /// Create a new line item with a fresh ID and the current timestamp.
    #[must_use]
    pub fn new(name: ItemName, unit_price: Price) -> Self {
        Self {
            id: ItemId::generate(),
            name,
            unit_price,
            added_at: Utc::now(),
        }
    }
}
