//! Tracing setup and the console logger.

/// Tracing configuration (filters, output format).
pub mod tracing;

/// `Logger` capability backed by tracing events.
pub mod logger;

pub use logger::TracingLogger;
pub use tracing::LogFormat;

/// Initialize process-wide tracing with the given output format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
