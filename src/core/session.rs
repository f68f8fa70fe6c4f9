//! Session controller
//!
//! Drives one run of the simulator against the backing store:
//!
//! ```text
//! Authenticating ──card ok, PIN ok──▶ Authenticated ──7. Exit──▶ Terminated
//!   ▲        │                             │  ▲
//!   └─card───┘                             └──┘ menu actions 1-6, invalid input
//!    rejected (reload)     PIN rejected ──▶ Terminated
//! ```
//!
//! A rejected card restarts the cycle from a fresh load. A rejected PIN ends
//! the session with no retry. Every action that changes the record, and the
//! balance inquiry, saves the full record before the menu is shown again.

use crate::core::auth::{authenticate_card, authenticate_pin, CardCredentials};
use crate::core::menu::{
    parse_convert_currency, parse_withdraw_currency, MenuChoice, CONVERT_MENU, MAIN_MENU,
    WITHDRAW_MENU,
};
use crate::core::teller::Teller;
use crate::core::traits::{Clock, RecordStore};
use crate::io::console::Console;
use crate::types::{AccountRecord, AtmError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Foreign amounts are shown rounded half away from zero to two places
fn two_places(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticating,
    Authenticated,
    Terminated,
}

/// How a session ended normally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose "Exit" from the menu
    Exited,
    /// The card was accepted but the PIN was not
    PinRejected,
}

/// Runs the authenticate-then-menu cycle
pub struct Session<S, C, R, W> {
    store: S,
    clock: C,
    console: Console<R, W>,
    state: SessionState,
}

impl<S, C, R, W> Session<S, C, R, W>
where
    S: RecordStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, clock: C, console: Console<R, W>) -> Self {
        Session {
            store,
            clock,
            console,
            state: SessionState::Authenticating,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Give back the console, e.g. to inspect scripted output
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run the session to completion
    ///
    /// # Returns
    ///
    /// * `Ok(SessionOutcome)` once the session has terminated normally
    /// * `Err(AtmError)` on a fatal error (store failure, console closed)
    pub fn run(&mut self) -> Result<SessionOutcome, AtmError> {
        let result = self.drive();
        self.state = SessionState::Terminated;
        result
    }

    fn drive(&mut self) -> Result<SessionOutcome, AtmError> {
        let record = loop {
            self.state = SessionState::Authenticating;
            let record = self.store.load()?;
            let credentials = self.read_card_credentials()?;

            if authenticate_card(&record, &credentials, self.clock.now().date()).is_ok() {
                break record;
            }
            self.console.say("Invalid card details. Restarting.")?;
            warn!("Card validation failed. Restarting.");
        };

        let pin = self.console.prompt("Enter PIN: ")?;
        if authenticate_pin(&record, &pin).is_err() {
            self.console.say("Invalid PIN. Exiting.")?;
            warn!("PIN validation failed");
            return Ok(SessionOutcome::PinRejected);
        }

        self.state = SessionState::Authenticated;
        let mut menu = MenuLoop {
            store: &self.store,
            console: &mut self.console,
            teller: Teller::new(record, &self.clock),
        };
        menu.run()?;
        Ok(SessionOutcome::Exited)
    }

    fn read_card_credentials(&mut self) -> Result<CardCredentials, AtmError> {
        Ok(CardCredentials {
            card_number: self.console.prompt("Enter card number: ")?,
            expiry: self.console.prompt("Enter expiry date (MM/YY): ")?,
            cvc: self.console.prompt("Enter CVC: ")?,
        })
    }
}

/// The authenticated part of a session
///
/// Holds the only copy of the record, inside the teller.
struct MenuLoop<'a, S, C: Clock, R, W> {
    store: &'a S,
    console: &'a mut Console<R, W>,
    teller: Teller<&'a C>,
}

impl<S, C, R, W> MenuLoop<'_, S, C, R, W>
where
    S: RecordStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    fn run(&mut self) -> Result<(), AtmError> {
        loop {
            self.console.say(MAIN_MENU)?;
            let answer = self.console.read_line()?;

            match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::ViewBalance) => self.view_balance()?,
                Ok(MenuChoice::Withdraw) => self.withdraw()?,
                Ok(MenuChoice::ViewTransactions) => self.view_transactions()?,
                Ok(MenuChoice::Deposit) => self.deposit()?,
                Ok(MenuChoice::ChangePin) => self.change_pin()?,
                Ok(MenuChoice::ConvertCurrency) => self.convert_currency()?,
                Ok(MenuChoice::Exit) => {
                    info!("User exited the system");
                    return Ok(());
                }
                Err(_) => {
                    self.console.say("Invalid choice. Try again.")?;
                    warn!("Invalid menu option selected");
                }
            }
        }
    }

    fn save(&self) -> Result<(), AtmError> {
        self.store.save(self.record())
    }

    fn record(&self) -> &AccountRecord {
        self.teller.record()
    }

    /// Report a rejected action; fatal errors are passed through
    fn reject(&mut self, error: AtmError) -> Result<(), AtmError> {
        match error {
            e if e.is_fatal() => Err(e),
            AtmError::InvalidAmount { .. } => self.console.say("Invalid amount."),
            AtmError::InvalidChoice { .. } => {
                warn!("Invalid currency option selected");
                self.console.say("Invalid choice.")
            }
            AtmError::InsufficientFunds { currency, .. } => {
                self.console.say(currency.insufficient_message())
            }
            other => {
                warn!("Action rejected: {}", other);
                self.console.say(other)
            }
        }
    }

    fn view_balance(&mut self) -> Result<(), AtmError> {
        let balance = self.teller.view_balance();
        self.console.say(format!("Your balance: {} GEL", balance.gel))?;
        self.console
            .say(format!("Your balance: {} EUR", two_places(balance.eur)))?;
        self.console
            .say(format!("Your balance: {} USD", two_places(balance.usd)))?;
        self.save()
    }

    fn withdraw(&mut self) -> Result<(), AtmError> {
        self.console.say(WITHDRAW_MENU)?;
        let answer = self.console.read_line()?;

        match parse_withdraw_currency(&answer) {
            Ok(currency) => {
                let prompt = format!("Enter amount to withdraw in {}: ", currency);
                let amount = match self.console.prompt_amount(&prompt) {
                    Ok(amount) => amount,
                    // Malformed amount: nothing changed, nothing to save
                    Err(e) => return self.reject(e),
                };

                match self.teller.withdraw(currency, amount) {
                    Ok(new_balance) => self.console.say(format!(
                        "You withdrew {} {}. New balance: {} {}.",
                        amount, currency, new_balance, currency
                    ))?,
                    Err(e) => self.reject(e)?,
                }
            }
            Err(e) => self.reject(e)?,
        }

        self.save()
    }

    fn view_transactions(&mut self) -> Result<(), AtmError> {
        self.console.say("Last 5 transactions:")?;
        let entries: Vec<String> = self.teller.recent_transactions().map(String::from).collect();
        for entry in entries {
            self.console.say(entry)?;
        }
        info!("Viewed last 5 transactions");
        Ok(())
    }

    fn deposit(&mut self) -> Result<(), AtmError> {
        let amount = match self.console.prompt_amount("Enter amount to deposit in GEL: ") {
            Ok(amount) => amount,
            Err(e) => return self.reject(e),
        };

        match self.teller.deposit(amount) {
            Ok(new_balance) => {
                self.console.say(format!(
                    "You deposited {} GEL. New balance: {} GEL.",
                    amount, new_balance
                ))?;
                self.save()
            }
            Err(e) => self.reject(e),
        }
    }

    fn change_pin(&mut self) -> Result<(), AtmError> {
        let new_pin = self.console.prompt("Enter new PIN: ")?;
        self.teller.change_pin(new_pin);
        self.console.say("PIN changed successfully.")?;
        self.save()
    }

    fn convert_currency(&mut self) -> Result<(), AtmError> {
        self.console.say(CONVERT_MENU)?;
        let answer = self.console.read_line()?;

        let amount = match self.console.prompt_amount("Enter amount in GEL: ") {
            Ok(amount) => amount,
            Err(e) => return self.reject(e),
        };

        match parse_convert_currency(&answer) {
            Ok(target) => match self.teller.convert(target, amount) {
                Ok(converted) => self.console.say(format!(
                    "{} GEL is approximately {} {}.",
                    amount,
                    two_places(converted),
                    target
                ))?,
                Err(e) => self.reject(e)?,
            },
            Err(e) => self.reject(e)?,
        }

        self.save()
    }
}
