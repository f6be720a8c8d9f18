//! The cart store - sole owner and mutator of the item sequence.
//!
//! Every mutating operation that succeeds persists the snapshot first and
//! notifies the change listener second, so the persisted copy is never ahead
//! of what is about to be rendered, and a render failure cannot leave stale
//! unsaved state behind.

use rust_decimal::Decimal;

use magma_core::{Item, ItemName, Price};

use crate::error::CartError;
use crate::persistence::CartStorage;
use crate::view::CartView;

/// Callback invoked with the current item sequence after every successful
/// mutation.
pub type ChangeListener = Box<dyn FnMut(&[Item])>;

/// Result of a [`CartStore::clear`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The cart had items and the caller confirmed; all of them were removed.
    Cleared {
        /// How many items were removed.
        removed: usize,
    },
    /// The cart was already empty; no confirmation was requested.
    AlreadyEmpty,
    /// The confirmation callback returned `false`; nothing changed.
    Declined,
}

/// A point-in-time summary of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// The items in display order.
    pub items: Vec<Item>,
    /// Sum of unit prices.
    pub total: Price,
    /// Number of line items.
    pub count: usize,
}

/// Owns the in-memory item sequence and is its only mutator.
///
/// Renderers and formatters read snapshots handed to them by the store; they
/// never hold a reference that outlives the call.
pub struct CartStore<S> {
    items: Vec<Item>,
    storage: S,
    on_change: Option<ChangeListener>,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store hydrated from the storage slot.
    ///
    /// A missing, corrupt, or unreadable slot hydrates an empty cart; the
    /// failure is logged and never propagated.
    pub fn hydrate(storage: S) -> Self {
        let items = match storage.load() {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load cart snapshot, starting empty");
                Vec::new()
            }
        };
        Self {
            items,
            storage,
            on_change: None,
        }
    }

    /// Register the listener notified after every successful mutation.
    ///
    /// The listener runs strictly after the persistence write.
    pub fn set_on_change(&mut self, listener: ChangeListener) {
        self.on_change = Some(listener);
    }

    /// Append a new line item to the end of the sequence.
    ///
    /// An empty or whitespace-only `name` is substituted with the generic
    /// placeholder label rather than rejected, so product cards without a
    /// title attribute can still add to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidPrice`] for a zero or negative price; the
    /// cart is left unchanged.
    pub fn add_item(&mut self, name: &str, unit_price: Decimal) -> Result<Item, CartError> {
        let price = Price::new(unit_price).map_err(|_| CartError::InvalidPrice(unit_price))?;
        if !price.is_positive() {
            return Err(CartError::InvalidPrice(unit_price));
        }

        let item = Item::new(ItemName::or_placeholder(name), price);
        self.items.push(item.clone());
        self.sync();
        Ok(item)
    }

    /// Remove the item at `index`, returning it.
    ///
    /// Returns `None` for an out-of-range index. A stale index from a
    /// superseded render is expected, not an error; the view rebuilds from
    /// this store after every mutation.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.sync();
        Some(item)
    }

    /// Remove all items, asking `confirm` first.
    ///
    /// An already-empty cart reports [`ClearOutcome::AlreadyEmpty`] without
    /// invoking `confirm` at all. The confirmation is a synchronous decision
    /// injected by the caller, typically a prompt in the UI adapter.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> ClearOutcome {
        if self.items.is_empty() {
            return ClearOutcome::AlreadyEmpty;
        }
        if !confirm() {
            return ClearOutcome::Declined;
        }

        let removed = self.items.len();
        self.items.clear();
        self.sync();
        ClearOutcome::Cleared { removed }
    }

    /// Sum of unit prices over all items.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.unit_price).sum()
    }

    /// Number of line items; each unit counts as one regardless of price.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in display order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// A point-in-time summary: items, total, and count.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            total: self.total(),
            count: self.count(),
        }
    }

    /// The display model for the current sequence.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from(self.items.as_slice())
    }

    /// Persist first, then notify. A failed write is logged and swallowed;
    /// the in-memory sequence stays authoritative for the session.
    fn sync(&mut self) {
        if let Err(e) = self.storage.save(&self.items) {
            tracing::warn!(error = %e, "failed to persist cart, continuing in-memory");
        }
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.items);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use super::*;
    use crate::persistence::{MemoryStorage, StorageError};

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn store() -> CartStore<MemoryStorage> {
        CartStore::hydrate(MemoryStorage::new())
    }

    #[test]
    fn test_add_items_accumulates_count_and_total() {
        let mut store = store();
        store.add_item("Remera", dec(15000)).unwrap();
        store.add_item("Short", dec(9000)).unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.total().amount(), dec(24000));
    }

    #[test]
    fn test_duplicates_are_separate_lines() {
        let mut store = store();
        let a = store.add_item("Remera", dec(15000)).unwrap();
        let b = store.add_item("Remera", dec(15000)).unwrap();

        assert_eq!(store.count(), 2);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_rejects_non_positive_price() {
        let mut store = store();
        assert!(matches!(
            store.add_item("X", dec(0)),
            Err(CartError::InvalidPrice(_))
        ));
        assert!(matches!(
            store.add_item("X", dec(-5)),
            Err(CartError::InvalidPrice(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_add_substitutes_placeholder_name() {
        let mut store = store();
        let item = store.add_item("   ", dec(100)).unwrap();
        assert_eq!(item.name.as_str(), ItemName::PLACEHOLDER);
    }

    #[test]
    fn test_remove_shifts_subsequent_items() {
        let mut store = store();
        store.add_item("Remera", dec(15000)).unwrap();
        store.add_item("Short", dec(9000)).unwrap();
        store.add_item("Buzo", dec(20000)).unwrap();

        let removed = store.remove_item(1).unwrap();
        assert_eq!(removed.name.as_str(), "Short");
        assert_eq!(store.count(), 2);
        assert_eq!(store.items().get(1).unwrap().name.as_str(), "Buzo");
    }

    #[test]
    fn test_remove_out_of_range_is_a_noop() {
        let mut store = store();
        store.add_item("Remera", dec(15000)).unwrap();

        assert!(store.remove_item(5).is_none());
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_clear_confirmed_empties_the_cart() {
        let mut store = store();
        store.add_item("Remera", dec(15000)).unwrap();
        store.add_item("Short", dec(9000)).unwrap();

        assert_eq!(store.clear(|| true), ClearOutcome::Cleared { removed: 2 });
        assert_eq!(store.count(), 0);
        assert_eq!(store.total(), Price::ZERO);
    }

    #[test]
    fn test_clear_declined_keeps_items() {
        let mut store = store();
        store.add_item("Remera", dec(15000)).unwrap();

        assert_eq!(store.clear(|| false), ClearOutcome::Declined);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_clear_on_empty_does_not_prompt() {
        let mut store = store();
        let asked = Rc::new(RefCell::new(false));
        let asked_in = Rc::clone(&asked);

        let outcome = store.clear(move || {
            *asked_in.borrow_mut() = true;
            true
        });

        assert_eq!(outcome, ClearOutcome::AlreadyEmpty);
        assert!(!*asked.borrow());
    }

    #[test]
    fn test_hydrate_from_corrupt_slot_starts_empty() {
        let store = CartStore::hydrate(MemoryStorage::with_slot("{{{ not json"));
        assert!(store.is_empty());
    }

    /// Storage that records each save so ordering against the change
    /// listener can be asserted.
    struct RecordingStorage {
        inner: MemoryStorage,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl CartStorage for RecordingStorage {
        fn load(&self) -> Result<Vec<Item>, StorageError> {
            self.inner.load()
        }

        fn save(&mut self, items: &[Item]) -> Result<(), StorageError> {
            self.log.borrow_mut().push("save");
            self.inner.save(items)
        }
    }

    #[test]
    fn test_persists_before_notifying() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::hydrate(RecordingStorage {
            inner: MemoryStorage::new(),
            log: Rc::clone(&log),
        });
        let log_in = Rc::clone(&log);
        store.set_on_change(Box::new(move |_| log_in.borrow_mut().push("notify")));

        store.add_item("Remera", dec(15000)).unwrap();

        assert_eq!(*log.borrow(), vec!["save", "notify"]);
    }

    /// Storage whose writes always fail, simulating a full quota.
    struct FailingStorage;

    impl CartStorage for FailingStorage {
        fn load(&self) -> Result<Vec<Item>, StorageError> {
            Ok(Vec::new())
        }

        fn save(&mut self, _items: &[Item]) -> Result<(), StorageError> {
            Err(StorageError::Io(io::Error::other("quota exceeded")))
        }
    }

    #[test]
    fn test_save_failure_keeps_in_memory_cart_authoritative() {
        let mut store = CartStore::hydrate(FailingStorage);

        store.add_item("Remera", dec(15000)).unwrap();
        store.add_item("Short", dec(9000)).unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.total().amount(), dec(24000));
    }

    #[test]
    fn test_mutations_still_notify_when_save_fails() {
        let mut store = CartStore::hydrate(FailingStorage);
        let notified = Rc::new(RefCell::new(0_usize));
        let notified_in = Rc::clone(&notified);
        store.set_on_change(Box::new(move |_| *notified_in.borrow_mut() += 1));

        store.add_item("Remera", dec(15000)).unwrap();
        store.remove_item(0).unwrap();

        assert_eq!(*notified.borrow(), 2);
    }
}
