//! Read-only views derived from the ledger
//!
//! Nothing in here mutates state; every function takes a transaction slice
//! and derives an ordering, grouping or aggregate from it.

pub mod daily;
pub mod summary;

pub use daily::{group_by_date, sorted_descending, DayGroup};
pub use summary::{period_summary, PeriodSummary};
