//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The persisted card record
//! - `currency`: Currencies and fixed conversion rates
//! - `expiry`: `MM/YY` card expiry dates
//! - `history`: Bounded transaction history
//! - `error`: Error types for the simulator

pub mod account;
pub mod currency;
pub mod error;
pub mod expiry;
pub mod history;

pub use account::AccountRecord;
pub use currency::Currency;
pub use error::AtmError;
pub use expiry::{ExpiryDate, InvalidExpiry};
pub use history::{TransactionHistory, HISTORY_CAPACITY};
