//! Error types for the ATM simulator
//!
//! This module defines all error types that can occur during a session.
//! Errors are designed to be descriptive and user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Persistence Errors**: Card file unreadable, unwritable or malformed (fatal)
//! - **Validation Errors**: Card details or PIN rejected
//! - **User Input Errors**: Malformed amounts, unknown menu selections
//! - **Balance Errors**: Insufficient funds, arithmetic overflow

use crate::types::currency::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ATM simulator
///
/// Store, console and log sink failures end a session (see [`AtmError::is_fatal`]).
/// Every other variant rejects a single action and the menu loop carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmError {
    /// The backing store could not be read, written or parsed
    ///
    /// This is a fatal error: it is logged and propagated to `main`.
    #[error("Card data error for '{path}': {message}")]
    Persistence {
        /// Path of the backing store
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// Card number, expiry or CVC did not match the stored card
    #[error("Invalid card details")]
    InvalidCard,

    /// Entered PIN did not match the stored PIN
    #[error("Invalid PIN")]
    InvalidPin,

    /// Amount was not a non-negative decimal
    #[error("Invalid amount '{input}'")]
    InvalidAmount {
        /// The rejected input
        input: String,
    },

    /// Menu or currency selection outside the accepted options
    #[error("Invalid choice '{input}'")]
    InvalidChoice {
        /// The rejected input
        input: String,
    },

    /// Withdrawal exceeds the balance held in that currency
    ///
    /// The balance is left untouched.
    #[error("Insufficient {currency} balance: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Currency of the affected balance
        currency: Currency,
        /// Balance at the time of the request
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Checked decimal arithmetic overflowed
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// The console reached end of input
    #[error("Input stream closed")]
    InputClosed,

    /// The diagnostic log file could not be opened
    #[error("Cannot open log file '{path}': {message}")]
    LogSink {
        /// Path of the log file
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// Reading from or writing to the console failed
    #[error("Console I/O error: {message}")]
    Console {
        /// Description of the I/O error
        message: String,
    },
}

// Console failures only; store failures carry their path and go through
// `AtmError::persistence`.
impl From<std::io::Error> for AtmError {
    fn from(error: std::io::Error) -> Self {
        AtmError::Console {
            message: error.to_string(),
        }
    }
}

impl AtmError {
    /// Create a Persistence error
    pub fn persistence(path: &std::path::Path, error: impl std::fmt::Display) -> Self {
        AtmError::Persistence {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        AtmError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an InvalidChoice error
    pub fn invalid_choice(input: &str) -> Self {
        AtmError::InvalidChoice {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(currency: Currency, available: Decimal, requested: Decimal) -> Self {
        AtmError::InsufficientFunds {
            currency,
            available,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AtmError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Whether this error must end the session
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AtmError::Persistence { .. }
                | AtmError::InputClosed
                | AtmError::Console { .. }
                | AtmError::LogSink { .. }
        )
    }
}
