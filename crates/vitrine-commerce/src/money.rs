//! Money type for catalog prices.
//!
//! Catalog prices are whole display units (merchants enter "15000", the
//! storefront shows "Rp15,000"). Amounts are integers to avoid the
//! floating-point precision issues that plague monetary values, and
//! display formatting groups thousands with no forced decimals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    IDR,
    INR,
    NGN,
    PHP,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::IDR => "IDR",
            Currency::INR => "INR",
            Currency::NGN => "NGN",
            Currency::PHP => "PHP",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::IDR => "Rp",
            Currency::INR => "\u{20b9}",
            Currency::NGN => "\u{20a6}",
            Currency::PHP => "\u{20b1}",
            Currency::MXN => "MX$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "IDR" => Some(Currency::IDR),
            "INR" => Some(Currency::INR),
            "NGN" => Some(Currency::NGN),
            "PHP" => Some(Currency::PHP),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is stored in the currency's display unit (e.g., whole
/// dollars or rupiah), matching how merchants enter catalog prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in display units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Apply a signed delta (e.g., a variant price modifier).
    pub fn offset(&self, delta: i64) -> Money {
        Money::new(self.amount.saturating_add(delta), self.currency)
    }

    /// Format as a display string with symbol (e.g., "$1,500").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the amount with thousands grouping, no symbol (e.g., "1,500").
    pub fn display_amount(&self) -> String {
        group_thousands(self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Insert a comma between every group of three digits.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    let first_group = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == first_group % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
