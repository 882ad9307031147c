use std::io::{self, BufReader, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use centavo::cli::run_shell;
use centavo::config::Settings;
use centavo::ledger::Ledger;
use centavo::taxonomy::Taxonomy;

#[derive(Parser)]
#[command(
    name = "centavo",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Centavo is a terminal-based personal finance tracker. It keeps \
                  accounts, categories and a transaction ledger for the duration \
                  of a session, entirely in memory."
)]
struct Cli {
    /// Currency symbol shown before amounts
    #[arg(long, env = "CENTAVO_CURRENCY", default_value = "₱")]
    currency: String,

    /// Start with no categories instead of the default set
    #[arg(long)]
    bare: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings {
        currency_symbol: cli.currency,
        ..Settings::default()
    };

    let mut ledger = Ledger::new();
    let mut taxonomy = if cli.bare {
        Taxonomy::new()
    } else {
        Taxonomy::with_defaults()
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("centavo - session ledger (type 'help' for commands, 'quit' to exit)");
    }

    run_shell(
        BufReader::new(stdin.lock()),
        &mut ledger,
        &mut taxonomy,
        &settings,
        interactive,
    )?;

    Ok(())
}
