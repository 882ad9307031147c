//! Newest-first ordering and per-day grouping

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

/// Transactions sorted newest first
///
/// The sort is stable, so transactions sharing a timestamp keep their
/// recording order relative to each other.
pub fn sorted_descending(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// A single day's transactions, newest first within the day
#[derive(Debug)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub transactions: Vec<&'a Transaction>,
}

impl DayGroup<'_> {
    /// Net total for the day: income minus expenses
    pub fn net_total(&self) -> Money {
        self.transactions.iter().map(|t| t.signed_amount()).sum()
    }
}

/// Group transactions by calendar date, most recent day first
///
/// Days with no transactions simply do not appear. Within each day the
/// newest-first ordering is preserved.
pub fn group_by_date(transactions: &[Transaction]) -> Vec<DayGroup<'_>> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();

    for transaction in sorted_descending(transactions) {
        match groups.last_mut() {
            Some(group) if group.date == transaction.date() => {
                group.transactions.push(transaction);
            }
            _ => groups.push(DayGroup {
                date: transaction.date(),
                transactions: vec![transaction],
            }),
        }
    }

    groups
}
