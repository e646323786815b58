use chrono::{DateTime, Utc};

use lendwise_core::{BorrowRecord, Item, KeyFn, LendingError, LendingResult, by_name, position_by_key};

use crate::store::ItemStore;

/// In-memory item store over two ordered vectors.
///
/// Lookups are linear scans by key and the first match wins, so duplicate names
/// behave as interchangeable copies.
#[derive(Debug, Clone)]
pub struct InMemoryItemStore {
    all: Vec<Item>,
    available: Vec<Item>,
    key: KeyFn,
}

impl InMemoryItemStore {
    /// Empty store matching items by name.
    pub fn new() -> Self {
        Self::with_key(by_name)
    }

    /// Empty store matching items by a custom key.
    pub fn with_key(key: KeyFn) -> Self {
        Self {
            all: Vec::new(),
            available: Vec::new(),
            key,
        }
    }

    /// Store pre-filled with `items`, all available.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.add(item);
        }
        store
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn key(&self) -> KeyFn {
        self.key
    }

    fn add(&mut self, item: Item) {
        tracing::debug!(item = item.name(), "item added to store");
        self.available.push(item.clone());
        self.all.push(item);
    }

    fn is_available(&self, item: &Item) -> bool {
        position_by_key(self.key, &self.available, item).is_some()
    }

    fn is_from_this_store(&self, item: &Item) -> bool {
        position_by_key(self.key, &self.all, item).is_some()
    }

    fn borrow(&mut self, item: &Item, starting_from: DateTime<Utc>) -> LendingResult<BorrowRecord> {
        let Some(index) = position_by_key(self.key, &self.available, item) else {
            tracing::warn!(item = item.name(), "borrow rejected: not available");
            return Err(LendingError::not_available(item.name()));
        };

        self.available.remove(index);
        tracing::debug!(
            item = item.name(),
            remaining = self.available.len(),
            "item borrowed from store"
        );

        Ok(BorrowRecord::new(item.clone(), starting_from))
    }

    fn return_back(&mut self, item: &Item) -> LendingResult<()> {
        if !self.is_from_this_store(item) {
            tracing::warn!(item = item.name(), "return rejected: not in store");
            return Err(LendingError::not_in_store(item.name()));
        }

        self.available.push(item.clone());
        tracing::debug!(
            item = item.name(),
            available = self.available.len(),
            "item returned to store"
        );
        Ok(())
    }

    fn all(&self) -> Vec<Item> {
        self.all.clone()
    }

    fn available(&self) -> Vec<Item> {
        self.available.clone()
    }
}
