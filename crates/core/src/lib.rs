//! `lendwise-core` — lending domain building blocks.
//!
//! Items, borrow records, the error model and the two injectable capabilities
//! (clock and logger). No storage and no orchestration live here.

pub mod clock;
pub mod error;
pub mod id;
pub mod item;
pub mod logger;
pub mod record;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{LendingError, LendingResult};
pub use id::RecordId;
pub use item::{Item, KeyFn, by_name, position_by_key, same_key};
pub use logger::{LogEntry, Logger, MemoryLogger};
pub use record::BorrowRecord;
