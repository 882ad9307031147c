//! Ledger engine
//!
//! The ledger owns the account list and the canonical transaction list, and
//! is the only component that may mutate account balances. Recording a
//! transaction validates first and then appends + adjusts the balance as a
//! single step, so there is never a state where one happened without the
//! other. Reversing removes the transaction and applies the inverse
//! adjustment.
//!
//! Invariant: for every account, the balance equals the opening balance
//! plus the sum of signed amounts of all currently-recorded transactions
//! against it. `recomputed_balance` checks this from scratch.

use tracing::debug;

use crate::error::{CentavoError, CentavoResult};
use crate::models::{
    Account, AccountId, AccountKind, Money, Transaction, TransactionId, TransactionKind,
};

/// The transaction ledger and the accounts it settles against
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    // === Accounts ===

    /// Add a new account
    pub fn add_account(
        &mut self,
        name: &str,
        kind: AccountKind,
        opening_balance: Money,
    ) -> CentavoResult<&Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CentavoError::EmptyField("Account name"));
        }

        if self.find_account_by_name(name).is_some() {
            return Err(CentavoError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let account = Account::new(name, kind, opening_balance);
        account
            .validate()
            .map_err(|e| CentavoError::Validation(e.to_string()))?;

        debug!(account = %account.name, kind = %account.kind, balance = %account.balance(), "account added");
        self.accounts.push(account);
        Ok(self.accounts.last().unwrap())
    }

    /// Remove an account
    ///
    /// Transactions recorded against it are retained; they carry an
    /// account-name snapshot so ledger rows stay meaningful.
    pub fn remove_account(&mut self, id: AccountId) -> CentavoResult<Account> {
        let position = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| CentavoError::account_not_found(id.to_string()))?;

        let account = self.accounts.remove(position);
        debug!(account = %account.name, "account removed");
        Ok(account)
    }

    /// All accounts, in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by ID
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Look up an account by exact name
    pub fn find_account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    /// Find an account by name or ID string
    pub fn find_account(&self, identifier: &str) -> Option<&Account> {
        if let Some(account) = self.find_account_by_name(identifier) {
            return Some(account);
        }

        self.accounts
            .iter()
            .find(|a| a.id.short() == identifier || a.id.as_uuid().to_string() == identifier)
    }

    /// The current balance of an account
    pub fn account_balance(&self, id: AccountId) -> CentavoResult<Money> {
        self.account(id)
            .map(|a| a.balance())
            .ok_or_else(|| CentavoError::account_not_found(id.to_string()))
    }

    /// Recompute an account balance from scratch: opening balance plus the
    /// signed amounts of every recorded transaction against it. Must equal
    /// the incrementally maintained balance at all times.
    pub fn recomputed_balance(&self, id: AccountId) -> CentavoResult<Money> {
        let account = self
            .account(id)
            .ok_or_else(|| CentavoError::account_not_found(id.to_string()))?;

        let delta: Money = self
            .transactions
            .iter()
            .filter(|t| t.account_id == id)
            .map(|t| t.signed_amount())
            .sum();

        Ok(account.opening_balance + delta)
    }

    // === Transactions ===

    /// Record a transaction and adjust the account balance
    ///
    /// Fails with `InvalidAmount` on a non-positive amount, `NotFound` if
    /// the account does not exist, and `InsufficientFunds` if an expense
    /// exceeds the current balance. On any failure nothing is mutated.
    pub fn record(
        &mut self,
        account_id: AccountId,
        category: &str,
        kind: TransactionKind,
        amount: Money,
        note: Option<String>,
    ) -> CentavoResult<Transaction> {
        if !amount.is_positive() {
            return Err(CentavoError::InvalidAmount(amount.to_string()));
        }

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or_else(|| CentavoError::account_not_found(account_id.to_string()))?;

        if kind == TransactionKind::Expense && amount > account.balance() {
            return Err(CentavoError::insufficient_funds(
                account.name.clone(),
                amount,
                account.balance(),
            ));
        }

        let mut transaction =
            Transaction::new(account.id, account.name.clone(), category, kind, amount);
        if let Some(note) = note {
            transaction.note = note;
        }
        transaction
            .validate()
            .map_err(|e| CentavoError::Validation(e.to_string()))?;

        account.adjust(transaction.signed_amount());
        self.transactions.push(transaction.clone());

        debug!(
            id = %transaction.id,
            account = %transaction.account_name,
            category = %transaction.category,
            kind = %transaction.kind,
            amount = %transaction.amount,
            "transaction recorded"
        );

        Ok(transaction)
    }

    /// Reverse a transaction: remove it from the ledger and restore the
    /// account balance with the inverse adjustment
    ///
    /// No sufficiency check applies; a reversal may legitimately drive a
    /// balance negative if intervening transactions already moved it. If
    /// the owning account was deleted, only the removal happens.
    pub fn reverse(&mut self, id: TransactionId) -> CentavoResult<Transaction> {
        let position = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CentavoError::transaction_not_found(id.to_string()))?;

        let transaction = self.transactions.remove(position);

        if let Some(account) = self
            .accounts
            .iter_mut()
            .find(|a| a.id == transaction.account_id)
        {
            account.adjust(-transaction.signed_amount());
        }

        debug!(
            id = %transaction.id,
            account = %transaction.account_name,
            amount = %transaction.amount,
            "transaction reversed"
        );

        Ok(transaction)
    }

    /// All transactions, in recording order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by ID
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Find a transaction by ID string or short display form
    pub fn find_transaction(&self, identifier: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.id.short() == identifier || t.id.as_uuid().to_string() == identifier)
    }

    /// Transactions recorded against an account, in recording order
    pub fn transactions_for_account(&self, id: AccountId) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account_id == id)
            .collect()
    }

    /// Number of recorded transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cash_ledger(centavos: i64) -> (Ledger, AccountId) {
        let mut ledger = Ledger::new();
        let id = ledger
            .add_account("Cash", AccountKind::Regular, Money::from_centavos(centavos))
            .unwrap()
            .id;
        (ledger, id)
    }

    #[test]
    fn test_add_account() {
        let (ledger, id) = cash_ledger(16569);
        assert_eq!(ledger.accounts().len(), 1);
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(16569));
    }

    #[test]
    fn test_add_account_rejects_blank_and_duplicate() {
        let (mut ledger, _) = cash_ledger(0);

        let err = ledger
            .add_account("  ", AccountKind::Regular, Money::zero())
            .unwrap_err();
        assert!(matches!(err, CentavoError::EmptyField(_)));

        let err = ledger
            .add_account("Cash", AccountKind::Savings, Money::zero())
            .unwrap_err();
        assert!(matches!(err, CentavoError::Duplicate { .. }));
        assert_eq!(ledger.accounts().len(), 1);
    }

    #[test]
    fn test_record_expense_adjusts_balance() {
        let (mut ledger, id) = cash_ledger(16569);

        let txn = ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(6569), None)
            .unwrap();

        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(10000));
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn test_record_income_adjusts_balance() {
        let (mut ledger, id) = cash_ledger(10000);

        ledger
            .record(id, "Salary", TransactionKind::Income, Money::from_centavos(5000), None)
            .unwrap();

        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(15000));
    }

    #[test]
    fn test_record_rejects_non_positive_amount() {
        let (mut ledger, id) = cash_ledger(10000);

        let err = ledger
            .record(id, "Food", TransactionKind::Expense, Money::zero(), None)
            .unwrap_err();
        assert!(matches!(err, CentavoError::InvalidAmount(_)));

        let err = ledger
            .record(id, "Food", TransactionKind::Income, Money::from_centavos(-100), None)
            .unwrap_err();
        assert!(matches!(err, CentavoError::InvalidAmount(_)));

        assert_eq!(ledger.transaction_count(), 0);
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(10000));
    }

    #[test]
    fn test_expense_equal_to_balance_succeeds() {
        let (mut ledger, id) = cash_ledger(10000);

        ledger
            .record(id, "Bills", TransactionKind::Expense, Money::from_centavos(10000), None)
            .unwrap();

        assert_eq!(ledger.account_balance(id).unwrap(), Money::zero());
    }

    #[test]
    fn test_expense_one_centavo_over_balance_fails() {
        let (mut ledger, id) = cash_ledger(10000);

        let err = ledger
            .record(id, "Bills", TransactionKind::Expense, Money::from_centavos(10001), None)
            .unwrap_err();

        match err {
            CentavoError::InsufficientFunds {
                requested,
                available,
                shortfall,
                ..
            } => {
                assert_eq!(requested, Money::from_centavos(10001));
                assert_eq!(available, Money::from_centavos(10000));
                assert_eq!(shortfall, Money::from_centavos(1));
            }
            other => panic!("unexpected error: {other}"),
        }

        // No mutation on failure
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(10000));
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn test_income_has_no_sufficiency_check() {
        let (mut ledger, id) = cash_ledger(0);

        ledger
            .record(id, "Salary", TransactionKind::Income, Money::from_centavos(123), None)
            .unwrap();
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(123));
    }

    #[test]
    fn test_record_unknown_account() {
        let mut ledger = Ledger::new();
        let err = ledger
            .record(
                AccountId::new(),
                "Food",
                TransactionKind::Expense,
                Money::from_centavos(100),
                None,
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reverse_is_left_inverse_of_record() {
        let (mut ledger, id) = cash_ledger(16569);

        let txn = ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(6569), None)
            .unwrap();
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(10000));

        ledger.reverse(txn.id).unwrap();
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(16569));
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn test_reverse_income_restores_downward() {
        let (mut ledger, id) = cash_ledger(10000);

        let txn = ledger
            .record(id, "Salary", TransactionKind::Income, Money::from_centavos(5000), None)
            .unwrap();
        ledger.reverse(txn.id).unwrap();

        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(10000));
    }

    #[test]
    fn test_reverse_can_drive_balance_negative() {
        let (mut ledger, id) = cash_ledger(0);

        // Income, then spend it all, then reverse the income.
        let income = ledger
            .record(id, "Salary", TransactionKind::Income, Money::from_centavos(5000), None)
            .unwrap();
        ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(5000), None)
            .unwrap();

        ledger.reverse(income.id).unwrap();
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(-5000));
        assert_eq!(
            ledger.recomputed_balance(id).unwrap(),
            ledger.account_balance(id).unwrap()
        );
    }

    #[test]
    fn test_reverse_unknown_transaction() {
        let (mut ledger, _) = cash_ledger(100);
        let err = ledger.reverse(TransactionId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_recomputed_balance_matches_through_history() {
        let (mut ledger, id) = cash_ledger(16569);

        let steps: [(&str, TransactionKind, i64); 4] = [
            ("Food", TransactionKind::Expense, 6569),
            ("Salary", TransactionKind::Income, 5000),
            ("Transport", TransactionKind::Expense, 1500),
            ("Allowance", TransactionKind::Income, 2000),
        ];

        for (category, kind, centavos) in steps {
            ledger
                .record(id, category, kind, Money::from_centavos(centavos), None)
                .unwrap();
            assert_eq!(
                ledger.recomputed_balance(id).unwrap(),
                ledger.account_balance(id).unwrap()
            );
        }

        let first = ledger.transactions()[0].id;
        ledger.reverse(first).unwrap();
        assert_eq!(
            ledger.recomputed_balance(id).unwrap(),
            ledger.account_balance(id).unwrap()
        );
    }

    #[test]
    fn test_remove_account_keeps_transactions() {
        let (mut ledger, id) = cash_ledger(10000);
        ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(100), None)
            .unwrap();

        let removed = ledger.remove_account(id).unwrap();
        assert_eq!(removed.name, "Cash");
        assert!(ledger.accounts().is_empty());

        // Historical rows keep the account-name snapshot
        assert_eq!(ledger.transaction_count(), 1);
        assert_eq!(ledger.transactions()[0].account_name, "Cash");
    }

    #[test]
    fn test_reverse_after_account_removed() {
        let (mut ledger, id) = cash_ledger(10000);
        let txn = ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(100), None)
            .unwrap();

        ledger.remove_account(id).unwrap();

        // The row is removed; there is no balance left to restore.
        ledger.reverse(txn.id).unwrap();
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn test_record_stores_note() {
        let (mut ledger, id) = cash_ledger(10000);
        let txn = ledger
            .record(
                id,
                "Food",
                TransactionKind::Expense,
                Money::from_centavos(100),
                Some("lunch".to_string()),
            )
            .unwrap();
        assert_eq!(txn.note, "lunch");
        assert_eq!(ledger.transaction(txn.id).unwrap().note, "lunch");
    }

    #[test]
    fn test_find_transaction_by_short_id() {
        let (mut ledger, id) = cash_ledger(10000);
        let txn = ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(100), None)
            .unwrap();

        let found = ledger.find_transaction(&txn.id.short()).unwrap();
        assert_eq!(found.id, txn.id);
        assert!(ledger.find_transaction("txn-00000000").is_none());
    }

    #[test]
    fn test_spec_scenario_cash_165_69() {
        // Cash created with ₱165.69
        let (mut ledger, id) = cash_ledger(16569);

        // Expense ₱65.69 on Food -> ₱100.00
        ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(6569), None)
            .unwrap();
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(10000));

        // Expense ₱150.00 on Food -> insufficient, balance unchanged
        let err = ledger
            .record(id, "Food", TransactionKind::Expense, Money::from_centavos(15000), None)
            .unwrap_err();
        assert!(err.is_insufficient_funds());
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(10000));

        // Income ₱50.00 on Salary -> ₱150.00
        ledger
            .record(id, "Salary", TransactionKind::Income, Money::from_centavos(5000), None)
            .unwrap();
        assert_eq!(ledger.account_balance(id).unwrap(), Money::from_centavos(15000));
        assert_eq!(ledger.transaction_count(), 2);
    }
}
