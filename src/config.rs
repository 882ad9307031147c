//! Session settings

use serde::{Deserialize, Serialize};

/// Display settings for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to amounts
    pub currency_symbol: String,

    /// chrono format string for dates in ledger output
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₱");
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }
}
