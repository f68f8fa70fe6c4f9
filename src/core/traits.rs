//! Core traits for persistence and time
//!
//! These seams let the session run against the JSON file store and the
//! system clock in production, and against in-memory stand-ins in tests.

use crate::types::{AccountRecord, AtmError};
use chrono::{Local, NaiveDateTime};

/// Backing store holding the single card record
pub trait RecordStore {
    /// Read the full record
    ///
    /// Fails with `AtmError::Persistence` if the store is unreadable or the
    /// content is malformed.
    fn load(&self) -> Result<AccountRecord, AtmError>;

    /// Overwrite the store with the full record
    ///
    /// Fails with `AtmError::Persistence` on write failure. A failed save must
    /// leave the previous content intact.
    fn save(&self, record: &AccountRecord) -> Result<(), AtmError>;
}

/// Source of the current local date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn load(&self) -> Result<AccountRecord, AtmError> {
        (**self).load()
    }

    fn save(&self, record: &AccountRecord) -> Result<(), AtmError> {
        (**self).save(record)
    }
}
