//! Account shell commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{CentavoError, CentavoResult};
use crate::ledger::Ledger;
use crate::models::{AccountKind, Money};

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    #[command(alias = "add")]
    Create {
        /// Account name
        name: String,
        /// Account kind (regular, savings, debt)
        #[arg(short, long, default_value = "regular")]
        kind: String,
        /// Opening balance (e.g., "165.69" or "165")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts with balances
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Show the current balance of an account
    Balance {
        /// Account name or ID
        account: String,
    },
    /// Remove an account (its transactions stay in the ledger)
    Remove {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: AccountCommands,
) -> CentavoResult<()> {
    match cmd {
        AccountCommands::Create {
            name,
            kind,
            balance,
        } => {
            let kind = AccountKind::parse(&kind).ok_or_else(|| {
                CentavoError::Validation(format!(
                    "Invalid account kind: '{}'. Valid kinds: regular, savings, debt",
                    kind
                ))
            })?;

            let opening = Money::parse(&balance).map_err(|e| {
                CentavoError::Validation(format!(
                    "Invalid balance format: '{}'. Use format like '165.69' or '165'. Error: {}",
                    balance, e
                ))
            })?;

            let account = ledger.add_account(&name, kind, opening)?;

            println!("Created account: {}", account.name);
            println!("  Kind: {}", account.kind);
            println!(
                "  Opening Balance: {}",
                account
                    .opening_balance
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            print!("{}", format_account_list(ledger.accounts(), settings));
        }

        AccountCommands::Show { account } => {
            let found = ledger
                .find_account(&account)
                .ok_or_else(|| CentavoError::account_not_found(&account))?;
            print!("{}", format_account_details(found, settings));
        }

        AccountCommands::Balance { account } => {
            let found = ledger
                .find_account(&account)
                .ok_or_else(|| CentavoError::account_not_found(&account))?;
            println!(
                "{}: {}",
                found.name,
                found
                    .balance()
                    .format_with_symbol(&settings.currency_symbol)
            );
        }

        AccountCommands::Remove { account } => {
            let id = ledger
                .find_account(&account)
                .ok_or_else(|| CentavoError::account_not_found(&account))?
                .id;

            let removed = ledger.remove_account(id)?;
            println!("Removed account: {}", removed.name);
        }
    }

    Ok(())
}
