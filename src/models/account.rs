//! Account model
//!
//! Accounts hold a running balance that only the ledger engine may adjust;
//! everything else reads it through the accessor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Everyday account (cash, wallet, checking)
    #[default]
    Regular,
    /// Savings or goal account
    Savings,
    /// Debt account (credit, mortgage)
    Debt,
}

impl AccountKind {
    /// Parse an account kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "regular" | "cash" => Some(Self::Regular),
            "savings" => Some(Self::Savings),
            "debt" => Some(Self::Debt),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => write!(f, "Regular"),
            Self::Savings => write!(f, "Savings"),
            Self::Debt => write!(f, "Debt"),
        }
    }
}

/// A financial account
///
/// The balance field is private: it is adjusted exclusively by the ledger
/// engine's record/reverse operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name, unique among accounts (e.g. "Cash")
    pub name: String,

    /// Kind of account
    pub kind: AccountKind,

    /// Balance at creation time
    pub opening_balance: Money,

    /// Current balance; opening balance plus all recorded transactions
    balance: Money,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with an opening balance
    pub fn new(name: impl Into<String>, kind: AccountKind, opening_balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            opening_balance,
            balance: opening_balance,
            created_at: Utc::now(),
        }
    }

    /// The current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Apply a signed delta to the balance. Ledger engine only.
    pub(crate) fn adjust(&mut self, delta: Money) {
        self.balance += delta;
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - Balance: {}", self.name, self.kind, self.balance)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
