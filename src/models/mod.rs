//! Core data models for centavo
//!
//! This module contains the data structures of the tracking domain:
//! accounts, categories, transactions and the fixed-point money type.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use category::Category;
pub use ids::{AccountId, CategoryId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
