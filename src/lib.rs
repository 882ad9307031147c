//! centavo - session-based personal finance tracker
//!
//! This library provides the ledger core of the centavo expense tracker:
//! accounts, spending/income categories and the transaction ledger that
//! ties them together. All state is in-memory and lives for the duration
//! of a session; there is no persistence layer.
//!
//! # Architecture
//!
//! - `models`: core data models (accounts, categories, transactions, money)
//! - `ledger`: the ledger engine - the only component allowed to mutate
//!   account balances and the transaction list
//! - `taxonomy`: the category list and its expense/income partition
//! - `views`: pure derivations over the transaction list (sorting, date
//!   grouping, period summaries)
//! - `display`: terminal formatting for the above
//! - `cli`: interactive shell commands
//! - `config`: display settings
//! - `error`: custom error types

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod taxonomy;
pub mod views;

pub use error::{CentavoError, CentavoResult};
pub use ledger::Ledger;
pub use taxonomy::Taxonomy;
