//! Borrow records: an item paired with the instant it was checked out.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::item::Item;

/// One checkout of one item.
///
/// Immutable after creation. Exactly one collection owns a record at a time (the
/// library's outstanding list or a reader's queue); it moves on borrow/return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowRecord {
    id: RecordId,
    item: Item,
    borrowed_at_epoch_millis: i64,
}

impl BorrowRecord {
    pub fn new(item: Item, borrowed_at: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(item, borrowed_at.timestamp_millis())
    }

    pub fn from_epoch_millis(item: Item, borrowed_at_epoch_millis: i64) -> Self {
        Self {
            id: RecordId::new(),
            item,
            borrowed_at_epoch_millis,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn borrowed_at_epoch_millis(&self) -> i64 {
        self.borrowed_at_epoch_millis
    }

    /// The checkout instant, if it is representable as a calendar time.
    pub fn borrowed_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.borrowed_at_epoch_millis).single()
    }
}
