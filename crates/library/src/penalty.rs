//! Overdue penalty calculation.

use std::sync::Arc;

use lendwise_core::{BorrowRecord, Clock};

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: f64 = 1000.0 * 3600.0 * 24.0;

/// Elapsed days at which a penalty starts being charged.
pub const GRACE_THRESHOLD_DAYS: f64 = 15.0;

/// Days subtracted from the elapsed time before charging.
pub const CHARGE_OFFSET_DAYS: f64 = 14.0;

/// Fraction of the borrow fee charged per chargeable day.
pub const DAILY_RATE: f64 = 0.01;

/// Derives a fee from a borrow record and the current time.
pub trait PenaltyCalculator: Send + Sync {
    fn calculate(&self, record: &BorrowRecord) -> f64;
}

/// Real-valued days between `borrowed_at_millis` and `now_millis`. Never floored.
pub fn days_elapsed(borrowed_at_millis: i64, now_millis: i64) -> f64 {
    (now_millis as f64 - borrowed_at_millis as f64) / MILLIS_PER_DAY
}

/// Fee for an item costing `borrow_fee` held for `days` days.
///
/// Zero inside `[0, 15)`; from day 15 on the charge is
/// `borrow_fee * 0.01 * (days - 14)`, so it jumps straight to one day's worth.
pub fn penalty_for(borrow_fee: f64, days: f64) -> f64 {
    if days >= GRACE_THRESHOLD_DAYS {
        return borrow_fee * DAILY_RATE * (days - CHARGE_OFFSET_DAYS);
    }
    0.0
}

/// Penalty calculator reading "now" from an injected clock.
#[derive(Clone)]
pub struct DefaultPenaltyCalculator {
    clock: Arc<dyn Clock>,
}

impl DefaultPenaltyCalculator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl core::fmt::Debug for DefaultPenaltyCalculator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DefaultPenaltyCalculator").finish_non_exhaustive()
    }
}

impl PenaltyCalculator for DefaultPenaltyCalculator {
    fn calculate(&self, record: &BorrowRecord) -> f64 {
        let days = days_elapsed(record.borrowed_at_epoch_millis(), self.clock.now_millis());
        penalty_for(record.item().borrow_fee(), days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendwise_core::{FixedClock, Item};

    fn calculator() -> DefaultPenaltyCalculator {
        DefaultPenaltyCalculator::new(Arc::new(FixedClock::from_date("2023-07-15").unwrap()))
    }

    fn borrowed_on(date: &str) -> BorrowRecord {
        let at = FixedClock::from_date(date).unwrap().now();
        BorrowRecord::new(Item::new("book", "isbn..", 10.0), at)
    }

    #[test]
    fn returned_within_allowed_time_costs_nothing() {
        assert_eq!(calculator().calculate(&borrowed_on("2023-07-01")), 0.0);
    }

    #[test]
    fn returned_late_is_charged_per_day_past_fourteen() {
        assert_eq!(calculator().calculate(&borrowed_on("2023-06-29")), 0.2);
    }

    #[test]
    fn day_fifteen_charges_one_full_day() {
        assert_eq!(calculator().calculate(&borrowed_on("2023-06-30")), 10.0 * 0.01);
    }

    #[test]
    fn partial_days_are_not_rounded() {
        assert_eq!(penalty_for(10.0, 14.999), 0.0);
        assert_eq!(penalty_for(100.0, 15.5), 100.0 * 0.01 * 1.5);
        assert_eq!(days_elapsed(0, (MILLIS_PER_DAY / 2.0) as i64), 0.5);
    }

    #[test]
    fn borrowing_in_the_future_costs_nothing() {
        assert_eq!(calculator().calculate(&borrowed_on("2023-08-01")), 0.0);
    }

    #[test]
    fn debug_output_does_not_read_the_clock() {
        struct UnreadableClock;
        impl Clock for UnreadableClock {
            fn now(&self) -> chrono::DateTime<chrono::Utc> {
                panic!("clock read while formatting")
            }
        }

        let calculator = DefaultPenaltyCalculator::new(Arc::new(UnreadableClock));
        assert_eq!(format!("{calculator:?}"), "DefaultPenaltyCalculator { .. }");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: nothing is charged inside the grace window.
            #[test]
            fn grace_window_is_free(fee in 0.0f64..10_000.0, days in 0.0f64..15.0) {
                prop_assert_eq!(penalty_for(fee, days), 0.0);
            }

            /// Property: past the window the charge follows the linear formula.
            #[test]
            fn late_charge_is_linear(fee in 0.0f64..10_000.0, days in 15.0f64..3_650.0) {
                let penalty = penalty_for(fee, days);
                prop_assert_eq!(penalty, fee * 0.01 * (days - 14.0));
                prop_assert!(penalty >= fee * 0.01);
            }
        }
    }
}
