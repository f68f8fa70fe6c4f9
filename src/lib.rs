//! ATM Simulator Library
//! # Overview
//!
//! This library provides a single-user, single-card ATM simulator. One card
//! record is loaded from a JSON file, the cardholder is authenticated, and a
//! console menu then applies actions to the record, saving it after each one.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (AccountRecord, Currency, TransactionHistory, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::auth`] - Card and PIN authentication
//!   - [`core::teller`] - Balance operations on the owned record
//!   - [`core::session`] - The authenticate-then-menu state machine
//! - [`io`] - JSON backing store and console
//! - [`logging`] - Diagnostic log sink
//!
//! # Menu Actions
//!
//! - **View Balance**: Show GEL, EUR and USD balances
//! - **Withdraw**: Debit one balance (rejected if funds are insufficient)
//! - **View Last 5 Transactions**: Show the bounded history
//! - **Deposit**: Credit the GEL balance
//! - **Change PIN**: Replace the stored PIN
//! - **Convert Currency**: Credit EUR or USD at a fixed rate without debiting GEL

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use self::core::{RecordStore, Session, SessionOutcome, SessionState, SystemClock, Teller};
pub use io::{Console, JsonFileStore};
pub use types::{AccountRecord, AtmError, Currency, ExpiryDate, TransactionHistory};
