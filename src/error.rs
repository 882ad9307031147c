//! Custom error types for centavo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every failure here is recoverable: the
//! operation that raised it performs no mutation and the session continues.

use thiserror::Error;

use crate::models::Money;

/// The main error type for centavo operations
#[derive(Error, Debug)]
pub enum CentavoError {
    /// A required text input was left blank
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// Amount input did not parse to a positive number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expense exceeds the account balance
    #[error("Insufficient funds in '{account}': requested {requested}, available {available} (short {shortfall})")]
    InsufficientFunds {
        account: String,
        requested: Money,
        available: Money,
        shortfall: Money,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CentavoError {
    /// Create an "insufficient funds" error, computing the shortfall
    pub fn insufficient_funds(
        account: impl Into<String>,
        requested: Money,
        available: Money,
    ) -> Self {
        Self::InsufficientFunds {
            account: account.into(),
            requested,
            available,
            shortfall: requested - available,
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an "insufficient funds" error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

/// Result type alias for centavo operations
pub type CentavoResult<T> = Result<T, CentavoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CentavoError::account_not_found("Cash");
        assert_eq!(err.to_string(), "Account not found: Cash");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_funds_computes_shortfall() {
        let err = CentavoError::insufficient_funds(
            "Cash",
            Money::from_centavos(15000),
            Money::from_centavos(10000),
        );
        match &err {
            CentavoError::InsufficientFunds { shortfall, .. } => {
                assert_eq!(*shortfall, Money::from_centavos(5000));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.is_insufficient_funds());
        assert!(err.to_string().contains("short ₱50.00"));
    }

    #[test]
    fn test_empty_field_display() {
        let err = CentavoError::EmptyField("Account name");
        assert_eq!(err.to_string(), "Account name must not be empty");
    }
}
