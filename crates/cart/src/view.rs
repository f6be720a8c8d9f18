//! Pure display model for the cart.
//!
//! Rendering maps a slice of items to a [`CartView`] value; applying that
//! value to a page, a terminal, or anything else is an adapter concern.

use magma_core::{Item, Price};

/// Placeholder row text shown when the cart has no items.
pub const EMPTY_PLACEHOLDER: &str = "El carrito está vacío";

/// Label of the trailing total row.
pub const TOTAL_LABEL: &str = "TOTAL:";

/// One rendered line item.
///
/// `index` is the item's position in the current sequence. Indices are
/// positional, not stable identifiers: after any mutation they must be
/// re-derived from a fresh render, never cached across mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    /// Position in the current sequence, 0-based.
    pub index: usize,
    /// Product label.
    pub name: String,
    /// Formatted unit price, e.g. `$15.000`.
    pub price: String,
}

/// The trailing total row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalView {
    /// Row label.
    pub label: &'static str,
    /// Formatted sum of unit prices.
    pub amount: String,
}

/// Display representation of the cart: one row per item plus a total row,
/// or a single placeholder row when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One row per item, in display order.
    pub lines: Vec<LineView>,
    /// Present exactly when the cart has items.
    pub total: Option<TotalView>,
    /// Present exactly when the cart is empty.
    pub placeholder: Option<&'static str>,
    /// Number of line items.
    pub item_count: usize,
}

impl CartView {
    /// The view of an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: None,
            placeholder: Some(EMPTY_PLACEHOLDER),
            item_count: 0,
        }
    }
}

impl From<&[Item]> for CartView {
    fn from(items: &[Item]) -> Self {
        if items.is_empty() {
            return Self::empty();
        }

        let lines = items
            .iter()
            .enumerate()
            .map(|(index, item)| LineView {
                index,
                name: item.name.as_str().to_owned(),
                price: item.unit_price.to_string(),
            })
            .collect();
        let total: Price = items.iter().map(|item| item.unit_price).sum();

        Self {
            lines,
            total: Some(TotalView {
                label: TOTAL_LABEL,
                amount: total.to_string(),
            }),
            placeholder: None,
            item_count: items.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use magma_core::ItemName;

    use super::*;

    fn item(name: &str, price: i64) -> Item {
        Item::new(
            ItemName::parse(name).unwrap(),
            Price::new(Decimal::from(price)).unwrap(),
        )
    }

    #[test]
    fn test_empty_cart_renders_placeholder_only() {
        let items: Vec<Item> = Vec::new();
        let view = CartView::from(items.as_slice());

        assert!(view.lines.is_empty());
        assert!(view.total.is_none());
        assert_eq!(view.placeholder, Some(EMPTY_PLACEHOLDER));
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_renders_one_row_per_item_plus_total() {
        let items = vec![item("Remera", 15000), item("Short", 9000)];
        let view = CartView::from(items.as_slice());

        assert_eq!(view.lines.len(), 2);
        assert!(view.placeholder.is_none());
        assert_eq!(view.item_count, 2);

        let first = view.lines.first().unwrap();
        assert_eq!((first.index, first.name.as_str()), (0, "Remera"));
        assert_eq!(first.price, "$15.000");

        let total = view.total.unwrap();
        assert_eq!(total.label, TOTAL_LABEL);
        assert_eq!(total.amount, "$24.000");
    }

    #[test]
    fn test_indices_rederive_after_removal() {
        let mut items = vec![item("Remera", 15000), item("Short", 9000), item("Buzo", 20000)];
        items.remove(0);

        let view = CartView::from(items.as_slice());
        let first = view.lines.first().unwrap();
        assert_eq!((first.index, first.name.as_str()), (0, "Short"));
        let second = view.lines.get(1).unwrap();
        assert_eq!((second.index, second.name.as_str()), (1, "Buzo"));
    }
}
