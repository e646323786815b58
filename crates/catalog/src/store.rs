//! The item store contract.

use chrono::{DateTime, Utc};

use lendwise_core::{BorrowRecord, Item, KeyFn, LendingResult};

/// Tracks every item ever added and the subset currently available.
///
/// Items are matched by key (the name, unless the implementation is configured
/// otherwise). Implementations must make each operation all-or-nothing: a failed
/// call leaves the store untouched.
pub trait ItemStore {
    /// The key every lookup of this store matches items by.
    fn key(&self) -> KeyFn;

    /// Adds `item` to the catalog and makes it available. No duplicate check: adding
    /// the same name twice yields two independent availability slots.
    fn add(&mut self, item: Item);

    /// True iff some available entry shares `item`'s key.
    fn is_available(&self, item: &Item) -> bool;

    /// True iff some catalog entry shares `item`'s key.
    fn is_from_this_store(&self, item: &Item) -> bool;

    /// Removes the first available entry sharing `item`'s key and returns a record
    /// pairing the `item` argument itself with `starting_from`.
    ///
    /// Fails with `NotAvailable` when no such entry exists.
    fn borrow(&mut self, item: &Item, starting_from: DateTime<Utc>) -> LendingResult<BorrowRecord>;

    /// Makes `item` available again.
    ///
    /// Fails with `NotInStore` when the key was never added. Nothing checks that the
    /// item was actually out, so returning twice creates a second slot.
    fn return_back(&mut self, item: &Item) -> LendingResult<()>;

    /// Snapshot of the catalog, in insertion order.
    fn all(&self) -> Vec<Item>;

    /// Snapshot of the available entries, in availability order.
    fn available(&self) -> Vec<Item>;
}
