//! Ledger display formatting
//!
//! Renders the grouped, newest-first ledger view with per-day totals, and
//! the period summary block.

use crate::config::Settings;
use crate::models::Transaction;
use crate::views::{group_by_date, period_summary, PeriodSummary};

use super::truncate;

/// Format the full ledger grouped by date, most recent day first
///
/// Each day gets a header line with its net total, then one row per
/// transaction, newest first.
pub fn format_ledger(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    for group in group_by_date(transactions) {
        output.push_str(&format!(
            "{} | Total: {}\n",
            group.date.format(&settings.date_format),
            group.net_total().format_with_symbol(symbol),
        ));

        for transaction in &group.transactions {
            let sign = if transaction.kind.is_income() { "+" } else { "-" };
            output.push_str(&format!(
                "  [{}] {:<20} {:<15} {}{}\n",
                transaction.id,
                truncate(&transaction.category, 20),
                truncate(&transaction.account_name, 15),
                sign,
                transaction.amount.format_with_symbol(symbol),
            ));
            if !transaction.note.is_empty() {
                output.push_str(&format!("        note: {}\n", transaction.note));
            }
        }

        output.push('\n');
    }

    output
}

/// Format a period summary block
pub fn format_summary(summary: &PeriodSummary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str(&format!(
        "  Total Income:  {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Total Expense: {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Net Balance:   {}\n",
        summary.net_balance.format_with_symbol(symbol)
    ));
    output
}

/// Convenience: summarize and format in one step
pub fn format_transactions_summary(transactions: &[Transaction], settings: &Settings) -> String {
    let refs: Vec<&Transaction> = transactions.iter().collect();
    format_summary(&period_summary(&refs), settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money, TransactionKind};
    use chrono::{Duration, Utc};

    fn txn(kind: TransactionKind, centavos: i64, days_ago: i64) -> Transaction {
        let mut t = Transaction::new(
            AccountId::new(),
            "Cash",
            "Food",
            kind,
            Money::from_centavos(centavos),
        );
        t.timestamp = Utc::now() - Duration::days(days_ago);
        t
    }

    #[test]
    fn test_empty_ledger_message() {
        let output = format_ledger(&[], &Settings::default());
        assert!(output.contains("No transactions recorded"));
    }

    #[test]
    fn test_day_headers_carry_totals() {
        let transactions = vec![
            txn(TransactionKind::Income, 5000, 0),
            txn(TransactionKind::Expense, 1500, 0),
            txn(TransactionKind::Expense, 200, 1),
        ];

        let output = format_ledger(&transactions, &Settings::default());
        assert!(output.contains("Total: ₱35.00"));
        assert!(output.contains("Total: -₱2.00"));
    }

    #[test]
    fn test_rows_carry_signs() {
        let transactions = vec![
            txn(TransactionKind::Income, 5000, 0),
            txn(TransactionKind::Expense, 1500, 0),
        ];

        let output = format_ledger(&transactions, &Settings::default());
        assert!(output.contains("+₱50.00"));
        assert!(output.contains("-₱15.00"));
    }

    #[test]
    fn test_note_shown_when_present() {
        let mut t = txn(TransactionKind::Expense, 100, 0);
        t.note = "lunch".to_string();

        let output = format_ledger(&[t], &Settings::default());
        assert!(output.contains("note: lunch"));
    }

    #[test]
    fn test_summary_block() {
        let transactions = vec![
            txn(TransactionKind::Income, 5000, 0),
            txn(TransactionKind::Expense, 6569, 0),
        ];

        let output = format_transactions_summary(&transactions, &Settings::default());
        assert!(output.contains("Total Income:  ₱50.00"));
        assert!(output.contains("Total Expense: ₱65.69"));
        assert!(output.contains("Net Balance:   -₱15.69"));
    }
}
