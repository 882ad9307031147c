//! Income/expense/net aggregation

use crate::models::{Money, Transaction, TransactionKind};

/// Aggregated totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodSummary {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts (as a positive figure)
    pub total_expense: Money,
    /// Income minus expenses; negative when spending exceeded income
    pub net_balance: Money,
}

/// Summarize a set of transactions
///
/// Callers pick the period by filtering the slice first; an empty slice
/// yields all-zero totals.
pub fn period_summary(transactions: &[&Transaction]) -> PeriodSummary {
    let mut summary = PeriodSummary::default();

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => summary.total_income += transaction.amount,
            TransactionKind::Expense => summary.total_expense += transaction.amount,
        }
    }

    summary.net_balance = summary.total_income - summary.total_expense;
    summary
}
