//! Transaction shell commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::ledger::{format_ledger, format_summary};
use crate::error::{CentavoError, CentavoResult};
use crate::ledger::Ledger;
use crate::models::Money;
use crate::taxonomy::{classify_name, Taxonomy};
use crate::views::period_summary;

/// Transaction subcommands
#[derive(Debug, Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction; direction is derived from the category
    Add {
        /// Account name or ID
        account: String,
        /// Category name (must exist; Salary and Allowance record as income)
        category: String,
        /// Amount (e.g., "65.69")
        amount: String,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Show the ledger grouped by date, newest first
    List {
        /// Restrict to one account (name or ID)
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Reverse a recorded transaction and restore the balance
    Reverse {
        /// Transaction ID
        transaction: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    taxonomy: &Taxonomy,
    settings: &Settings,
    cmd: TransactionCommands,
) -> CentavoResult<()> {
    match cmd {
        TransactionCommands::Add {
            account,
            category,
            amount,
            note,
        } => {
            let account_id = ledger
                .find_account(&account)
                .ok_or_else(|| CentavoError::account_not_found(&account))?
                .id;

            let category = taxonomy
                .find_by_name(&category)
                .ok_or_else(|| CentavoError::category_not_found(&category))?;

            let amount = Money::parse(&amount)
                .map_err(|e| CentavoError::InvalidAmount(format!("'{}': {}", amount, e)))?;

            let kind = classify_name(&category.name).transaction_kind();
            let recorded = ledger.record(account_id, &category.name, kind, amount, note)?;

            println!(
                "Recorded {}: {} {} on {}",
                recorded.kind,
                recorded
                    .amount
                    .format_with_symbol(&settings.currency_symbol),
                recorded.category,
                recorded.account_name,
            );
            println!(
                "  New balance: {}",
                ledger
                    .account_balance(account_id)?
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID: {}", recorded.id);
        }

        TransactionCommands::List { account } => {
            match account {
                Some(identifier) => {
                    let id = ledger
                        .find_account(&identifier)
                        .ok_or_else(|| CentavoError::account_not_found(&identifier))?
                        .id;
                    let filtered: Vec<_> = ledger
                        .transactions_for_account(id)
                        .into_iter()
                        .cloned()
                        .collect();
                    print!("{}", format_ledger(&filtered, settings));
                }
                None => print!("{}", format_ledger(ledger.transactions(), settings)),
            };
        }

        TransactionCommands::Reverse { transaction } => {
            let id = ledger
                .find_transaction(&transaction)
                .ok_or_else(|| CentavoError::transaction_not_found(&transaction))?
                .id;

            let reversed = ledger.reverse(id)?;
            println!(
                "Reversed {}: {} {}",
                reversed.kind,
                reversed
                    .amount
                    .format_with_symbol(&settings.currency_symbol),
                reversed.category,
            );

            if let Some(account) = ledger.account(reversed.account_id) {
                println!(
                    "  Restored balance: {}",
                    account
                        .balance()
                        .format_with_symbol(&settings.currency_symbol)
                );
            }
        }
    }

    Ok(())
}

/// Print the period summary over the whole ledger
pub fn handle_summary_command(ledger: &Ledger, settings: &Settings) -> CentavoResult<()> {
    let refs: Vec<_> = ledger.transactions().iter().collect();
    let summary = period_summary(&refs);

    println!("Summary ({} transactions)", ledger.transaction_count());
    print!("{}", format_summary(&summary, settings));
    Ok(())
}
