//! Clock capability: the source of "now".

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{LendingError, LendingResult};

/// Supplies the current instant.
///
/// Calls are independent snapshots; nothing guarantees two successive calls are
/// monotonic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current instant as milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Wall-clock time.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant. Used by tests and reproducible demo runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Parses `YYYY-MM-DD` and freezes the clock at UTC midnight of that day.
    pub fn from_date(date: &str) -> LendingResult<Self> {
        let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| LendingError::validation(format!("invalid date `{date}`: {e}")))?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| LendingError::validation(format!("invalid date `{date}`")))?;
        Ok(Self::new(midnight.and_utc()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
