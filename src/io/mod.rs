//! I/O module
//!
//! Handles the backing store and the console.
//!
//! # Components
//!
//! - `json_store` - JSON card file with atomic saves
//! - `console` - Prompt/response over any reader and writer

pub mod console;
pub mod json_store;

pub use console::{parse_amount, Console};
pub use json_store::{JsonFileStore, DEFAULT_CARD_FILE};
