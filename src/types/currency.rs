//! Currencies held on the card
//!
//! The home currency is the Georgian lari (GEL). Euro and dollar balances are
//! side pockets filled by the fixed-rate conversion.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// GEL → EUR rate used by currency conversion
pub const EUR_RATE: Decimal = dec!(0.34);

/// GEL → USD rate used by currency conversion
pub const USD_RATE: Decimal = dec!(0.37);

/// A currency balance on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Georgian lari, the home currency
    Gel,
    /// Euro
    Eur,
    /// US dollar
    Usd,
}

impl Currency {
    /// ISO code shown to the user
    pub fn code(self) -> &'static str {
        match self {
            Currency::Gel => "GEL",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    /// Rate applied when converting GEL into this currency
    ///
    /// Returns `None` for GEL, which is never a conversion target.
    pub fn conversion_rate(self) -> Option<Decimal> {
        match self {
            Currency::Gel => None,
            Currency::Eur => Some(EUR_RATE),
            Currency::Usd => Some(USD_RATE),
        }
    }

    /// Message printed when a withdrawal exceeds this balance
    pub fn insufficient_message(self) -> &'static str {
        match self {
            Currency::Gel => "Insufficient balance.",
            Currency::Eur => "Insufficient Euro balance.",
            Currency::Usd => "Insufficient Dollar balance.",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
