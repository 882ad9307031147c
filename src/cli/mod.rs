//! Interactive shell
//!
//! Commands are read line by line, split with shell quoting rules, and
//! parsed with clap. All state lives in memory for the session; `quit`
//! or end of input ends it.

pub mod account;
pub mod category;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use transaction::{handle_summary_command, handle_transaction_command, TransactionCommands};

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Settings;
use crate::error::CentavoResult;
use crate::ledger::Ledger;
use crate::taxonomy::Taxonomy;

/// One line of shell input
#[derive(Debug, Parser)]
#[command(no_binary_name = true)]
pub struct ShellInput {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Top-level shell commands
#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Manage accounts
    #[command(subcommand)]
    Account(AccountCommands),

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Record and inspect transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show income, expense and net totals for the session
    Summary,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Dispatch one parsed command. Returns false when the session should end.
pub fn dispatch(
    input: ShellInput,
    ledger: &mut Ledger,
    taxonomy: &mut Taxonomy,
    settings: &Settings,
) -> CentavoResult<bool> {
    match input.command {
        ShellCommand::Account(cmd) => handle_account_command(ledger, settings, cmd)?,
        ShellCommand::Category(cmd) => handle_category_command(taxonomy, cmd)?,
        ShellCommand::Transaction(cmd) => {
            handle_transaction_command(ledger, taxonomy, settings, cmd)?
        }
        ShellCommand::Summary => handle_summary_command(ledger, settings)?,
        ShellCommand::Quit => return Ok(false),
    }

    Ok(true)
}

/// Run the shell over a line-based input stream
///
/// Blank lines and `#` comments are skipped, so the same loop serves both
/// interactive use and piped scripts. Errors are printed and the session
/// continues; only end of input or `quit` stops it.
pub fn run_shell<R: BufRead>(
    input: R,
    ledger: &mut Ledger,
    taxonomy: &mut Taxonomy,
    settings: &Settings,
    interactive: bool,
) -> io::Result<()> {
    if interactive {
        print!("centavo> ");
        io::stdout().flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if !line.is_empty() && !line.starts_with('#') {
            debug!(line, "shell input");

            match shell_words::split(line) {
                Err(e) => println!("Error: {}", e),
                Ok(words) => match ShellInput::try_parse_from(words) {
                    Err(e) => {
                        // clap renders help and usage through its own printer
                        let _ = e.print();
                    }
                    Ok(parsed) => match dispatch(parsed, ledger, taxonomy, settings) {
                        Ok(true) => {}
                        Ok(false) => return Ok(()),
                        Err(e) => println!("Error: {}", e),
                    },
                },
            }
        }

        if interactive {
            print!("centavo> ");
            io::stdout().flush()?;
        }
    }

    Ok(())
}
