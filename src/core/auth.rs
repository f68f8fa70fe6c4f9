//! Card and PIN authentication
//!
//! Authentication runs in two gates. The card gate checks the card number,
//! the expiry and the CVC together; the PIN gate is a single exact match.
//! Neither gate says which field was wrong.

use crate::types::{AccountRecord, AtmError, ExpiryDate};
use chrono::NaiveDate;
use tracing::info;

/// Card details typed in at the card gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCredentials {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

/// A CVC is exactly three characters that parse as an integer
fn is_well_formed_cvc(cvc: &str) -> bool {
    cvc.chars().count() == 3 && cvc.parse::<i32>().is_ok()
}

/// Check entered card details against the stored record
///
/// Succeeds iff all of the following hold:
/// - the card number matches exactly
/// - the entered expiry parses as `MM/YY`
/// - the stored expiry parses as `MM/YY` and has not passed as of `today`
/// - the entered CVC is well formed and matches exactly
///
/// The entered expiry only has to be well formed; a stored card that has
/// expired is rejected whatever the user types.
///
/// # Errors
///
/// Returns `AtmError::InvalidCard` if any check fails.
pub fn authenticate_card(
    record: &AccountRecord,
    credentials: &CardCredentials,
    today: NaiveDate,
) -> Result<(), AtmError> {
    let entered_expiry_ok = credentials.expiry.parse::<ExpiryDate>().is_ok();
    let stored_expiry_ok = record
        .expiry_date
        .parse::<ExpiryDate>()
        .is_ok_and(|expiry| !expiry.is_expired(today));

    let valid = record.card_number == credentials.card_number
        && entered_expiry_ok
        && stored_expiry_ok
        && is_well_formed_cvc(&credentials.cvc)
        && record.cvc == credentials.cvc;

    if valid {
        info!("Card validation successful");
        Ok(())
    } else {
        info!("Card validation failed");
        Err(AtmError::InvalidCard)
    }
}

/// Check an entered PIN against the stored record
///
/// # Errors
///
/// Returns `AtmError::InvalidPin` on mismatch.
pub fn authenticate_pin(record: &AccountRecord, pin: &str) -> Result<(), AtmError> {
    if record.pin == pin {
        info!("PIN validation successful");
        Ok(())
    } else {
        info!("PIN validation failed");
        Err(AtmError::InvalidPin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn record() -> AccountRecord {
        AccountRecord::new("4000123412341234", "12/28", "1234", "123")
    }

    fn credentials(card_number: &str, expiry: &str, cvc: &str) -> CardCredentials {
        CardCredentials {
            card_number: card_number.to_string(),
            expiry: expiry.to_string(),
            cvc: cvc.to_string(),
        }
    }

    #[test]
    fn test_matching_card_is_accepted() {
        let result = authenticate_card(
            &record(),
            &credentials("4000123412341234", "12/28", "123"),
            today(),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_entered_expiry_only_needs_to_parse() {
        // The entered expiry is not compared against the stored one
        let result = authenticate_card(
            &record(),
            &credentials("4000123412341234", "01/27", "123"),
            today(),
        );
        assert_eq!(result, Ok(()));
    }

    #[rstest]
    #[case::card_number_mismatch("4000123412349999", "12/28", "123")]
    #[case::card_number_whitespace("4000123412341234 ", "12/28", "123")]
    #[case::cvc_mismatch("4000123412341234", "12/28", "321")]
    #[case::cvc_too_short("4000123412341234", "12/28", "12")]
    #[case::cvc_too_long("4000123412341234", "12/28", "1234")]
    #[case::cvc_not_numeric("4000123412341234", "12/28", "12a")]
    #[case::entered_expiry_malformed("4000123412341234", "2028-12", "123")]
    #[case::entered_expiry_bad_month("4000123412341234", "13/28", "123")]
    #[case::entered_expiry_empty("4000123412341234", "", "123")]
    fn test_mismatched_details_are_rejected(
        #[case] card_number: &str,
        #[case] expiry: &str,
        #[case] cvc: &str,
    ) {
        let result = authenticate_card(&record(), &credentials(card_number, expiry, cvc), today());
        assert_eq!(result, Err(AtmError::InvalidCard));
    }

    #[rstest]
    #[case::expired_last_year("12/25")]
    #[case::expired_this_month("10/26")]
    #[case::stored_expiry_malformed("December 2028")]
    fn test_bad_stored_expiry_is_rejected(#[case] stored_expiry: &str) {
        let mut record = record();
        record.expiry_date = stored_expiry.to_string();

        let result = authenticate_card(
            &record,
            &credentials("4000123412341234", "12/28", "123"),
            today(),
        );
        assert_eq!(result, Err(AtmError::InvalidCard));
    }

    #[test]
    fn test_stored_malformed_cvc_never_matches() {
        let mut record = record();
        record.cvc = "12".to_string();

        let result = authenticate_card(
            &record,
            &credentials("4000123412341234", "12/28", "12"),
            today(),
        );
        assert_eq!(result, Err(AtmError::InvalidCard));
    }

    #[rstest]
    #[case::exact("1234", Ok(()))]
    #[case::wrong("4321", Err(AtmError::InvalidPin))]
    #[case::prefix("123", Err(AtmError::InvalidPin))]
    #[case::trailing_space("1234 ", Err(AtmError::InvalidPin))]
    #[case::empty("", Err(AtmError::InvalidPin))]
    fn test_authenticate_pin(#[case] pin: &str, #[case] expected: Result<(), AtmError>) {
        assert_eq!(authenticate_pin(&record(), pin), expected);
    }
}
