//! Lending workflow: penalties, the library aggregate and its readers.
//!
//! Control flows reader → library → item store; the library consults the clock
//! and penalty calculator on return and reports to the logger throughout.

pub mod library;
pub mod penalty;
pub mod reader;

pub use library::Library;
pub use penalty::{DefaultPenaltyCalculator, PenaltyCalculator};
pub use reader::Reader;
