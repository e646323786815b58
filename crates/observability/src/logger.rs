use lendwise_core::{LogEntry, Logger};

/// Console logger: every entry becomes an `info` event.
///
/// Collection snapshots are rendered as JSON so they stay machine-readable under
/// the JSON subscriber.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

/// Human-readable text for an entry.
pub fn render(entry: &LogEntry) -> String {
    let snapshot = match entry {
        LogEntry::Message(text) => return text.clone(),
        LogEntry::Items(items) => serde_json::to_string(items),
        LogEntry::Records(records) => serde_json::to_string(records),
    };
    snapshot.unwrap_or_else(|err| format!("{entry:?} (unserializable: {err})"))
}

impl Logger for TracingLogger {
    fn log(&self, entry: LogEntry) {
        match &entry {
            LogEntry::Message(text) => tracing::info!(target: "lendwise", "{text}"),
            LogEntry::Items(items) => {
                tracing::info!(target: "lendwise", count = items.len(), snapshot = %render(&entry), "items")
            }
            LogEntry::Records(records) => {
                tracing::info!(target: "lendwise", count = records.len(), snapshot = %render(&entry), "records")
            }
        }
    }
}
