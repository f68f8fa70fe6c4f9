//! Bounded transaction history
//!
//! The card keeps only its most recent entries. Appending to a full history
//! evicts the oldest entry first.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;

/// Number of entries retained on the card
pub const HISTORY_CAPACITY: usize = 5;

/// Ordered, human-readable history entries, oldest first
///
/// Serialized as a plain JSON array of strings. A persisted history longer
/// than [`HISTORY_CAPACITY`] keeps only its newest entries on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransactionHistory {
    entries: VecDeque<String>,
}

impl TransactionHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest one when at capacity
    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// Entries in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TransactionHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = TransactionHistory::new();
        for entry in iter {
            history.push(entry);
        }
        history
    }
}

impl<'de> Deserialize<'de> for TransactionHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<String>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
