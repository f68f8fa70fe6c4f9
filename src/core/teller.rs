//! Balance operations on the card record
//!
//! This module provides the `Teller`, which owns the single `AccountRecord`
//! for the length of a session and applies every menu action to it.
//!
//! The Teller is responsible for:
//! - Validating amounts before touching a balance
//! - Applying deposits, withdrawals and conversions with checked arithmetic
//! - Appending timestamped entries to the bounded transaction history
//!
//! It never persists anything; saving is the session's job.

use crate::core::traits::Clock;
use crate::types::{AccountRecord, AtmError, Currency};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Timestamp layout used in history entries
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// All three balances at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub gel: Decimal,
    pub eur: Decimal,
    pub usd: Decimal,
}

/// Applies menu actions to the owned card record
pub struct Teller<C: Clock> {
    record: AccountRecord,
    clock: C,
}

impl<C: Clock> Teller<C> {
    /// Take ownership of a freshly loaded record
    pub fn new(record: AccountRecord, clock: C) -> Self {
        Teller { record, clock }
    }

    /// Current state of the record
    pub fn record(&self) -> &AccountRecord {
        &self.record
    }

    /// Append a timestamped history entry
    fn record_action(&mut self, action: &str) {
        let timestamp = self.clock.now().format(HISTORY_TIMESTAMP_FORMAT);
        self.record
            .transaction_history
            .push(format!("{}: {}", timestamp, action));
        info!("{}", action);
    }

    /// Reject negative amounts
    fn ensure_non_negative(amount: Decimal) -> Result<(), AtmError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            warn!("Rejected negative amount {}", amount);
            return Err(AtmError::invalid_amount(&amount.to_string()));
        }
        Ok(())
    }

    /// Read all balances and note the inquiry in the history
    pub fn view_balance(&mut self) -> BalanceSnapshot {
        let snapshot = BalanceSnapshot {
            gel: self.record.balance,
            eur: self.record.euro_balance,
            usd: self.record.dollar_balance,
        };
        self.record_action("Viewed balance");
        snapshot
    }

    /// Withdraw `amount` from the balance held in `currency`
    ///
    /// # Returns
    ///
    /// The new balance in that currency.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is negative
    /// - The amount exceeds the balance (the balance is left untouched)
    /// - Subtracting would overflow
    pub fn withdraw(&mut self, currency: Currency, amount: Decimal) -> Result<Decimal, AtmError> {
        Self::ensure_non_negative(amount)?;

        let available = self.record.balance_of(currency);
        if amount > available {
            warn!(
                "{} withdrawal failed due to insufficient balance",
                currency
            );
            return Err(AtmError::insufficient_funds(currency, available, amount));
        }

        let new_balance = available
            .checked_sub(amount)
            .ok_or_else(|| AtmError::arithmetic_overflow("withdrawal"))?;
        *self.record.balance_mut(currency) = new_balance;

        self.record_action(&format!("Withdrew {} {}", amount, currency));
        Ok(new_balance)
    }

    /// Deposit `amount` into the home currency balance
    ///
    /// # Returns
    ///
    /// The new GEL balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or adding would overflow.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        Self::ensure_non_negative(amount)?;

        let new_balance = self
            .record
            .balance
            .checked_add(amount)
            .ok_or_else(|| AtmError::arithmetic_overflow("deposit"))?;
        self.record.balance = new_balance;

        self.record_action(&format!("Deposited {} {}", amount, Currency::Gel));
        Ok(new_balance)
    }

    /// Replace the stored PIN
    ///
    /// There is no confirmation step and the old PIN is not asked for again.
    pub fn change_pin(&mut self, new_pin: impl Into<String>) {
        self.record.pin = new_pin.into();
        self.record_action("Changed PIN");
    }

    /// Credit the GEL equivalent of `amount` to a foreign balance
    ///
    /// The GEL balance is not debited and no history entry is written.
    ///
    /// # Returns
    ///
    /// The converted amount credited to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `target` is GEL
    /// - The amount is negative
    /// - The conversion or the credit would overflow
    pub fn convert(&mut self, target: Currency, amount: Decimal) -> Result<Decimal, AtmError> {
        let rate = target
            .conversion_rate()
            .ok_or_else(|| AtmError::invalid_choice(target.code()))?;
        Self::ensure_non_negative(amount)?;

        let converted = amount
            .checked_mul(rate)
            .ok_or_else(|| AtmError::arithmetic_overflow("conversion"))?;
        let credited = self
            .record
            .balance_of(target)
            .checked_add(converted)
            .ok_or_else(|| AtmError::arithmetic_overflow("conversion"))?;
        *self.record.balance_mut(target) = credited;

        info!("Converted {} GEL to {:.2} {}", amount, converted, target);
        Ok(converted)
    }

    /// History entries, oldest first
    pub fn recent_transactions(&self) -> impl Iterator<Item = &str> {
        self.record.transaction_history.iter()
    }
}
