//! Menu selections
//!
//! Parses the numbered answers of the main menu and of the two currency
//! sub-menus.

use crate::types::{AtmError, Currency};
use std::str::FromStr;

/// Main menu, rendered verbatim before every selection
pub const MAIN_MENU: &str = "\n1. View Balance\n2. Withdraw Money\n3. View Last 5 Transactions\n4. Deposit Money\n5. Change PIN\n6. Convert Currency\n7. Exit";

/// Currency sub-menu for withdrawals
pub const WITHDRAW_MENU: &str = "Select currency to withdraw:\n1. GEL\n2. EUR\n3. USD";

/// Currency sub-menu for conversions
pub const CONVERT_MENU: &str = "Select currency to convert to:\n1. Euro\n2. US Dollar";

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewBalance,
    Withdraw,
    ViewTransactions,
    Deposit,
    ChangePin,
    ConvertCurrency,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ViewBalance),
            "2" => Ok(MenuChoice::Withdraw),
            "3" => Ok(MenuChoice::ViewTransactions),
            "4" => Ok(MenuChoice::Deposit),
            "5" => Ok(MenuChoice::ChangePin),
            "6" => Ok(MenuChoice::ConvertCurrency),
            "7" => Ok(MenuChoice::Exit),
            other => Err(AtmError::invalid_choice(other)),
        }
    }
}

/// Parse the answer to [`WITHDRAW_MENU`]
pub fn parse_withdraw_currency(input: &str) -> Result<Currency, AtmError> {
    match input.trim() {
        "1" => Ok(Currency::Gel),
        "2" => Ok(Currency::Eur),
        "3" => Ok(Currency::Usd),
        other => Err(AtmError::invalid_choice(other)),
    }
}

/// Parse the answer to [`CONVERT_MENU`]
pub fn parse_convert_currency(input: &str) -> Result<Currency, AtmError> {
    match input.trim() {
        "1" => Ok(Currency::Eur),
        "2" => Ok(Currency::Usd),
        other => Err(AtmError::invalid_choice(other)),
    }
}
