//! Readers: clients that borrow from and return to a library.

use std::collections::VecDeque;
use std::sync::Arc;

use lendwise_catalog::ItemStore;
use lendwise_core::{BorrowRecord, Item, LendingError, LendingResult, LogEntry, Logger, RecordId};

use crate::library::Library;

/// A reader holding a FIFO of the records they currently have.
///
/// The queue is the reader's own view, kept separately from the library's
/// outstanding list.
pub struct Reader {
    name: String,
    held: VecDeque<BorrowRecord>,
    logger: Arc<dyn Logger>,
}

impl Reader {
    pub fn new(name: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self {
            name: name.into(),
            held: VecDeque::new(),
            logger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records currently held, oldest first.
    pub fn held(&self) -> &VecDeque<BorrowRecord> {
        &self.held
    }

    /// Borrows `item` from `library` now and queues the record at the tail.
    pub fn borrow_from<S: ItemStore>(
        &mut self,
        library: &mut Library<S>,
        item: &Item,
    ) -> LendingResult<RecordId> {
        self.logger.log(LogEntry::message(format!(
            "{} wants to borrow {}",
            self.name,
            item.name()
        )));

        let record = library.borrow_now(item)?;
        let id = record.id();
        self.held.push_back(record);
        Ok(id)
    }

    /// Returns the oldest held record to `library`.
    ///
    /// When the library refuses, the error is logged and the record goes back to
    /// the head of the queue before the error is handed to the caller.
    pub fn return_first_borrowed_to<S: ItemStore>(
        &mut self,
        library: &mut Library<S>,
    ) -> LendingResult<()> {
        let Some(record) = self.held.pop_front() else {
            return Err(LendingError::nothing_to_return(&self.name));
        };

        if let Err(err) = library.return_back(record.item()) {
            tracing::warn!(
                reader = %self.name,
                record_id = %record.id(),
                error = %err,
                "return failed; keeping record"
            );
            self.logger.log(LogEntry::message(err.to_string()));
            self.held.push_front(record);
            return Err(err);
        }

        Ok(())
    }
}

impl core::fmt::Debug for Reader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reader")
            .field("name", &self.name)
            .field("held", &self.held)
            .finish_non_exhaustive()
    }
}
