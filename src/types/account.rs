//! Account record types for the ATM simulator
//!
//! This module defines the single persisted card record and its
//! balance accessors.

use super::currency::Currency;
use super::history::TransactionHistory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The persisted card and account state
///
/// Field names follow the camelCase layout of the card data file:
///
/// ```json
/// {
///   "cardNumber": "4000123412341234",
///   "expiryDate": "12/28",
///   "pin": "1234",
///   "cvc": "123",
///   "balance": 500,
///   "euroBalance": 0,
///   "dollarBalance": 0,
///   "transactionHistory": []
/// }
/// ```
///
/// Balances are written as exact JSON numbers so a load/save cycle never
/// drifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// Card number, compared exactly against user input
    pub card_number: String,

    /// Expiry in `MM/YY` form
    ///
    /// Kept as text so that a malformed stored expiry fails authentication
    /// instead of failing the load.
    pub expiry_date: String,

    /// PIN, changed through the menu
    pub pin: String,

    /// Three-digit card verification code
    pub cvc: String,

    /// Home currency (GEL) balance
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,

    /// Euro balance
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub euro_balance: Decimal,

    /// Dollar balance
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub dollar_balance: Decimal,

    /// Most recent actions, oldest first
    #[serde(default)]
    pub transaction_history: TransactionHistory,
}

impl AccountRecord {
    /// Create a record with zero balances and an empty history
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        pin: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        AccountRecord {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            pin: pin.into(),
            cvc: cvc.into(),
            balance: Decimal::ZERO,
            euro_balance: Decimal::ZERO,
            dollar_balance: Decimal::ZERO,
            transaction_history: TransactionHistory::new(),
        }
    }

    /// Balance held in `currency`
    pub fn balance_of(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Gel => self.balance,
            Currency::Eur => self.euro_balance,
            Currency::Usd => self.dollar_balance,
        }
    }

    /// First currency whose balance is below zero, if any
    pub fn negative_balance(&self) -> Option<Currency> {
        [Currency::Gel, Currency::Eur, Currency::Usd]
            .into_iter()
            .find(|&currency| self.balance_of(currency) < Decimal::ZERO)
    }

    /// Mutable access to the balance held in `currency`
    pub fn balance_mut(&mut self, currency: Currency) -> &mut Decimal {
        match currency {
            Currency::Gel => &mut self.balance,
            Currency::Eur => &mut self.euro_balance,
            Currency::Usd => &mut self.dollar_balance,
        }
    }
}
