//! Money type for peso amounts
//!
//! Internally stores amounts as i64 centavos (hundredths of a peso) so
//! ledger arithmetic never loses precision. Display uses the peso sign and
//! thousands grouping, matching how balances are shown in the UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in centavos (hundredths of a peso)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from centavos
    ///
    /// # Examples
    /// ```
    /// use centavo::models::Money;
    /// let amount = Money::from_centavos(16569); // ₱165.69
    /// ```
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Create an amount from whole pesos and centavos
    pub const fn from_pesos(pesos: i64, centavos: i64) -> Self {
        Self(pesos * 100 + centavos)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in centavos
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// The whole-peso portion (truncated toward zero)
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// The centavo portion (0-99)
    pub const fn centavo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts the formats users type into the amount field: "165.69",
    /// "-165.69", "₱165.69", "1,234.56", "165". More than two decimal
    /// digits are truncated. Never panics: non-digit decimals and amounts
    /// that would overflow the centavo range report `InvalidFormat`.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let s = s.strip_prefix('₱').unwrap_or(s).trim_start();
        let s = s.replace(',', "");
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(String::new()));
        }

        let centavos = match s.split_once('.') {
            Some((pesos_str, centavos_str)) => {
                let pesos: i64 = pesos_str
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?;
                let decimals: String = centavos_str.chars().take(2).collect();
                if !decimals.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MoneyParseError::InvalidFormat(s.clone()));
                }
                let centavos: i64 = match decimals.len() {
                    0 => 0,
                    1 => {
                        decimals
                            .parse::<i64>()
                            .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?
                            * 10
                    }
                    _ => decimals
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?,
                };
                pesos
                    .checked_mul(100)
                    .and_then(|p| p.checked_add(centavos))
                    .ok_or_else(|| MoneyParseError::InvalidFormat(s.clone()))?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.clone()))?
                .checked_mul(100)
                .ok_or_else(|| MoneyParseError::InvalidFormat(s.clone()))?,
        };

        Ok(Self(if negative { -centavos } else { centavos }))
    }

    /// Format with an arbitrary currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                group_thousands(self.pesos().abs()),
                self.centavo_part()
            )
        } else {
            format!(
                "{}{}.{:02}",
                symbol,
                group_thousands(self.pesos()),
                self.centavo_part()
            )
        }
    }
}

/// Insert comma separators into a non-negative whole-peso count
fn group_thousands(pesos: i64) -> String {
    let digits = pesos.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("₱"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
