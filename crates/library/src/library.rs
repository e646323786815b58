//! The library aggregate: a store plus outstanding-loan bookkeeping.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use lendwise_catalog::ItemStore;
use lendwise_core::{
    BorrowRecord, Clock, Item, KeyFn, LendingError, LendingResult, LogEntry, Logger, same_key,
};

use crate::penalty::{DefaultPenaltyCalculator, PenaltyCalculator};

pub const ALL_ITEMS_CAPTION: &str = "These are all the items in the library...";
pub const AVAILABLE_ITEMS_CAPTION: &str =
    "These are all the items available to be borrowed in the library...";
pub const BORROWED_ITEMS_CAPTION: &str = "These are all the borrowed items from the library...";

/// Orchestrates borrowing and returning over an inner [`ItemStore`].
///
/// The library is itself an `ItemStore`: catalog queries delegate to the inner
/// store, while `borrow` and `return_back` also maintain the list of outstanding
/// records. A return is only accepted when a matching outstanding record exists,
/// which makes a second return of the same item fail here even though the inner
/// store alone would accept it.
///
/// Outstanding records are matched with the inner store's key, so the two layers
/// always agree on which items are the same item.
///
/// Clock, logger and penalty calculator are injected; nothing is hardwired.
pub struct Library<S> {
    store: S,
    outstanding: Vec<BorrowRecord>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Logger>,
    penalty: Arc<dyn PenaltyCalculator>,
}

impl<S: ItemStore> Library<S> {
    pub fn new(
        store: S,
        clock: Arc<dyn Clock>,
        logger: Arc<dyn Logger>,
        penalty: Arc<dyn PenaltyCalculator>,
    ) -> Self {
        Self {
            store,
            outstanding: Vec::new(),
            clock,
            logger,
            penalty,
        }
    }

    /// Library charging penalties with [`DefaultPenaltyCalculator`] over `clock`.
    pub fn with_default_penalty(store: S, clock: Arc<dyn Clock>, logger: Arc<dyn Logger>) -> Self {
        let penalty = Arc::new(DefaultPenaltyCalculator::new(Arc::clone(&clock)));
        Self::new(store, clock, logger, penalty)
    }

    /// Borrows `item` starting from the clock's current instant.
    pub fn borrow_now(&mut self, item: &Item) -> LendingResult<BorrowRecord> {
        let now = self.clock.now();
        self.borrow(item, now)
    }

    /// Records currently out, oldest first.
    pub fn outstanding(&self) -> &[BorrowRecord] {
        &self.outstanding
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn display_all_items(&self) {
        self.logger.log(LogEntry::message(ALL_ITEMS_CAPTION));
        self.logger.log(LogEntry::Items(self.store.all()));
    }

    pub fn display_available_items(&self) {
        self.logger.log(LogEntry::message(AVAILABLE_ITEMS_CAPTION));
        self.logger.log(LogEntry::Items(self.store.available()));
    }

    pub fn display_borrowed_items(&self) {
        self.logger.log(LogEntry::message(BORROWED_ITEMS_CAPTION));
        self.logger.log(LogEntry::Records(self.outstanding.clone()));
    }

    fn outstanding_position(&self, item: &Item) -> Option<usize> {
        let key = self.store.key();
        self.outstanding
            .iter()
            .position(|record| same_key(key, record.item(), item))
    }
}

impl<S: ItemStore> ItemStore for Library<S> {
    fn key(&self) -> KeyFn {
        self.store.key()
    }

    fn add(&mut self, item: Item) {
        self.store.add(item);
    }

    fn is_available(&self, item: &Item) -> bool {
        self.store.is_available(item)
    }

    fn is_from_this_store(&self, item: &Item) -> bool {
        self.store.is_from_this_store(item)
    }

    fn borrow(&mut self, item: &Item, starting_from: DateTime<Utc>) -> LendingResult<BorrowRecord> {
        let record = self.store.borrow(item, starting_from)?;
        self.outstanding.push(record.clone());

        tracing::info!(
            record_id = %record.id(),
            item = item.name(),
            outstanding = self.outstanding.len(),
            "item lent"
        );
        Ok(record)
    }

    fn return_back(&mut self, item: &Item) -> LendingResult<()> {
        let Some(index) = self.outstanding_position(item) else {
            tracing::warn!(item = item.name(), "return rejected: no outstanding record");
            return Err(LendingError::not_outstanding(item.name()));
        };

        let penalty = self.penalty.calculate(&self.outstanding[index]);
        if penalty != 0.0 {
            self.logger.log(LogEntry::message(format!(
                "You have to pay this penalty: **{penalty}**!"
            )));
        }

        self.store.return_back(item)?;
        let record = self.outstanding.remove(index);

        tracing::info!(
            record_id = %record.id(),
            item = item.name(),
            penalty,
            outstanding = self.outstanding.len(),
            "item returned"
        );
        Ok(())
    }

    fn all(&self) -> Vec<Item> {
        self.store.all()
    }

    fn available(&self) -> Vec<Item> {
        self.store.available()
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Library<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Library")
            .field("store", &self.store)
            .field("outstanding", &self.outstanding)
            .finish_non_exhaustive()
    }
}
