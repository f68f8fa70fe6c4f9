//! Core business logic module
//!
//! This module contains the session components:
//! - `traits` - Seams for the backing store and the clock
//! - `auth` - Card and PIN authentication
//! - `teller` - Balance operations on the owned card record
//! - `menu` - Menu selection parsing
//! - `session` - The authenticate-then-menu state machine

pub mod auth;
pub mod menu;
pub mod session;
pub mod teller;
pub mod traits;

pub use auth::{authenticate_card, authenticate_pin, CardCredentials};
pub use menu::MenuChoice;
pub use session::{Session, SessionOutcome, SessionState};
pub use teller::{BalanceSnapshot, Teller};
pub use traits::{Clock, FixedClock, RecordStore, SystemClock};
