//! Account display formatting

use crate::config::Settings;
use crate::models::{Account, Money};

/// Format the account list with balances as a table, with a total row
pub fn format_account_list(accounts: &[Account], settings: &Settings) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let kind_width = accounts
        .iter()
        .map(|a| a.kind.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<kind_width$}  {:>14}\n",
        "Name",
        "Kind",
        "Balance",
        name_width = name_width,
        kind_width = kind_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<kind_width$}  {:->14}\n",
        "",
        "",
        "",
        name_width = name_width,
        kind_width = kind_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<name_width$}  {:<kind_width$}  {:>14}\n",
            account.name,
            account.kind.to_string(),
            account.balance().format_with_symbol(&settings.currency_symbol),
            name_width = name_width,
            kind_width = kind_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance()).sum();

    output.push_str(&format!(
        "{:-<name_width$}  {:-<kind_width$}  {:->14}\n",
        "",
        "",
        "",
        name_width = name_width,
        kind_width = kind_width,
    ));

    output.push_str(&format!(
        "{:<name_width$}  {:<kind_width$}  {:>14}\n",
        "TOTAL",
        "",
        total.format_with_symbol(&settings.currency_symbol),
        name_width = name_width,
        kind_width = kind_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:              {}\n", account.id));
    output.push_str(&format!("  Kind:            {}\n", account.kind));
    output.push_str(&format!(
        "  Opening Balance: {}\n",
        account.opening_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Current Balance: {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Created:         {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountKind;

    #[test]
    fn test_format_account_list() {
        let accounts = vec![
            Account::new("Cash", AccountKind::Regular, Money::from_centavos(16569)),
            Account::new("Emergency Fund", AccountKind::Savings, Money::from_centavos(1000000)),
        ];

        let output = format_account_list(&accounts, &Settings::default());
        assert!(output.contains("Cash"));
        assert!(output.contains("Emergency Fund"));
        assert!(output.contains("₱165.69"));
        assert!(output.contains("₱10,000.00"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("₱10,165.69"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_account_list(&[], &Settings::default());
        assert!(output.contains("No accounts found"));
    }

    #[test]
    fn test_format_account_details() {
        let account = Account::new("Cash", AccountKind::Regular, Money::from_centavos(16569));
        let output = format_account_details(&account, &Settings::default());

        assert!(output.contains("Account: Cash"));
        assert!(output.contains("Regular"));
        assert!(output.contains("Opening Balance: ₱165.69"));
        assert!(output.contains("Current Balance: ₱165.69"));
    }
}
