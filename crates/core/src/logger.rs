//! Logger capability: a side channel for human-readable output.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::item::Item;
use crate::record::BorrowRecord;

/// Anything the lending components hand to a [`Logger`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LogEntry {
    /// Free-form text (captions, intents, penalties, errors).
    Message(String),
    /// Snapshot of a collection of items.
    Items(Vec<Item>),
    /// Snapshot of a collection of borrow records.
    Records(Vec<BorrowRecord>),
}

impl LogEntry {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            LogEntry::Message(text) => Some(text),
            _ => None,
        }
    }
}

/// Receives entries for display. No format contract beyond "human-readable".
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);
}

/// Logger that keeps every entry in memory, in order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the `Message` entries, as text.
    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .iter()
            .filter_map(LogEntry::as_message)
            .map(str::to_owned)
            .collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, entry: LogEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_logger_keeps_entries_in_order() {
        let logger = MemoryLogger::new();
        logger.log(LogEntry::message("first"));
        logger.log(LogEntry::Items(vec![Item::new("Dune", "isbn-1", 10.0)]));
        logger.log(LogEntry::message("second"));

        assert_eq!(logger.entries().len(), 3);
        assert_eq!(logger.messages(), vec!["first", "second"]);

        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn entries_serialize_with_a_kind_tag() {
        let json = serde_json::to_value(LogEntry::message("hello")).unwrap();
        assert_eq!(json["kind"], "message");
        assert_eq!(json["value"], "hello");

        let json = serde_json::to_value(LogEntry::Items(vec![Item::new("Dune", "isbn-1", 10.0)]))
            .unwrap();
        assert_eq!(json["kind"], "items");
        assert_eq!(json["value"][0]["name"], "Dune");
    }
}
