//! Transaction model
//!
//! A transaction is immutable once recorded: there is no in-place edit of
//! amount, category or account. The amount is always positive; direction is
//! carried by the kind. The account name is snapshotted so ledger rows stay
//! meaningful if the account is later deleted, the same way the category
//! field is a plain label that survives category deletion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Parse a kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction was recorded against
    pub account_id: AccountId,

    /// Account name at recording time (survives account deletion)
    pub account_name: String,

    /// Category name label (survives category deletion)
    pub category: String,

    /// Direction of the transaction
    pub kind: TransactionKind,

    /// Amount, always positive; sign is carried by `kind`
    pub amount: Money,

    /// Creation timestamp
    pub timestamp: DateTime<Utc>,

    /// Optional free-text note
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(
        account_id: AccountId,
        account_name: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionKind,
        amount: Money,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id,
            account_name: account_name.into(),
            category: category.into(),
            kind,
            amount,
            timestamp: Utc::now(),
            note: String::new(),
        }
    }

    /// The signed contribution of this transaction to its account balance:
    /// +amount for income, -amount for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// The calendar date of the transaction (grouping key for ledger views)
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.kind.is_income() { "+" } else { "-" };
        write!(
            f,
            "{} {} {}{}",
            self.timestamp.format("%Y-%m-%d"),
            self.category,
            sign,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Transaction category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
