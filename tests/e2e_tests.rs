//! End-to-end integration tests
//!
//! These tests drive complete sessions against JSON card fixtures. Each test:
//! 1. Copies a fixture from tests/fixtures/ into a temporary directory
//! 2. Runs a session with scripted console input and a pinned clock
//! 3. Checks the console output and the card file left on disk
//!
//! Fixtures cover:
//! - A valid card with a GEL balance
//! - An expired card
//! - A card whose history is already full
//! - A truncated, malformed card file
//! - A card file holding a negative balance

#[cfg(test)]
mod tests {
    use atm_simulator::core::FixedClock;
    use atm_simulator::{
        AccountRecord, AtmError, Console, JsonFileStore, RecordStore, Session, SessionOutcome,
    };
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const LOGIN: &str = "4000123412341234\n12/28\n123\n1234\n";

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    /// Copy a fixture into a fresh temporary directory
    ///
    /// Returns the directory guard and the path of the working card file.
    fn stage_fixture(fixture_name: &str) -> (TempDir, PathBuf) {
        let source = format!("tests/fixtures/{}.json", fixture_name);
        assert!(
            Path::new(&source).exists(),
            "Fixture file not found: {}",
            source
        );

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let card_file = dir.path().join("cardData.json");
        fs::copy(&source, &card_file)
            .unwrap_or_else(|e| panic!("Failed to copy fixture {}: {}", source, e));
        (dir, card_file)
    }

    /// Run a scripted session against the card file
    fn run_session(card_file: &Path, script: &str) -> (Result<SessionOutcome, AtmError>, String) {
        let store = JsonFileStore::new(card_file);
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = Session::new(store, clock(), console);

        let outcome = session.run();
        let output = String::from_utf8(session.into_console().into_output())
            .expect("Console output is not UTF-8");
        (outcome, output)
    }

    fn reload(card_file: &Path) -> AccountRecord {
        JsonFileStore::new(card_file)
            .load()
            .unwrap_or_else(|e| panic!("Failed to reload card file: {}", e))
    }

    #[test]
    fn test_withdraw_more_than_balance_is_rejected() {
        let (_dir, card_file) = stage_fixture("card_data");

        let (outcome, output) = run_session(&card_file, &format!("{}2\n1\n600\n7\n", LOGIN));

        assert_eq!(outcome, Ok(SessionOutcome::Exited));
        assert!(output.contains("Insufficient balance."));
        let record = reload(&card_file);
        assert_eq!(record.balance, dec!(500));
        assert!(record.transaction_history.is_empty());
    }

    #[test]
    fn test_two_deposits_from_zero() {
        let (_dir, card_file) = stage_fixture("card_data");
        let mut record = reload(&card_file);
        record.balance = dec!(0);
        JsonFileStore::new(&card_file).save(&record).unwrap();

        let (outcome, output) =
            run_session(&card_file, &format!("{}4\n50\n4\n50\n7\n", LOGIN));

        assert_eq!(outcome, Ok(SessionOutcome::Exited));
        assert!(output.contains("You deposited 50 GEL. New balance: 100 GEL."));
        let record = reload(&card_file);
        assert_eq!(record.balance, dec!(100));
        let entries: Vec<&str> = record.transaction_history.iter().collect();
        assert_eq!(
            entries,
            vec![
                "2026-10-19 12:00:00: Deposited 50 GEL",
                "2026-10-19 12:00:00: Deposited 50 GEL",
            ]
        );
    }

    #[test]
    fn test_convert_100_gel_to_eur() {
        let (_dir, card_file) = stage_fixture("card_data");

        let (_, output) = run_session(&card_file, &format!("{}6\n1\n100\n7\n", LOGIN));

        assert!(output.contains("100 GEL is approximately 34.00 EUR."));
        let record = reload(&card_file);
        assert_eq!(record.euro_balance, dec!(34.00));
        assert_eq!(record.balance, dec!(500));
        let raw = fs::read_to_string(&card_file).unwrap();
        assert!(raw.contains(r#""euroBalance": 34.00"#));
    }

    #[test]
    fn test_full_history_evicts_oldest() {
        let (_dir, card_file) = stage_fixture("full_history");

        let (_, output) = run_session(&card_file, &format!("{}1\n3\n7\n", LOGIN));

        assert!(output.contains("Your balance: 0 GEL"));
        assert!(output.contains("Your balance: 12.35 EUR"));
        assert!(output.contains("Your balance: 7.50 USD"));
        assert!(!output.contains("Deposited 10 GEL"));
        assert!(output.contains("2026-10-19 12:00:00: Viewed balance"));

        let record = reload(&card_file);
        let entries: Vec<&str> = record.transaction_history.iter().collect();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], "2026-10-02 08:00:00: Deposited 20 GEL");
        assert_eq!(entries[4], "2026-10-19 12:00:00: Viewed balance");
        // Unrounded balances survive the save
        assert_eq!(record.euro_balance, dec!(12.346));
    }

    #[test]
    fn test_pin_change_applies_to_next_session() {
        let (_dir, card_file) = stage_fixture("card_data");

        let (outcome, _) = run_session(&card_file, &format!("{}5\n0000\n7\n", LOGIN));
        assert_eq!(outcome, Ok(SessionOutcome::Exited));

        let (outcome, output) = run_session(&card_file, LOGIN);
        assert_eq!(outcome, Ok(SessionOutcome::PinRejected));
        assert!(output.contains("Invalid PIN. Exiting."));

        let (outcome, _) = run_session(&card_file, "4000123412341234\n12/28\n123\n0000\n7\n");
        assert_eq!(outcome, Ok(SessionOutcome::Exited));
    }

    #[rstest]
    #[case::wrong_card_number("4000123412349999\n12/28\n123\n")]
    #[case::wrong_cvc("4000123412341234\n12/28\n999\n")]
    #[case::short_cvc("4000123412341234\n12/28\n12\n")]
    #[case::malformed_expiry("4000123412341234\n2028/12\n123\n")]
    fn test_rejected_card_restarts_then_succeeds(#[case] bad_attempt: &str) {
        let (_dir, card_file) = stage_fixture("card_data");

        let script = format!("{}{}7\n", bad_attempt, LOGIN);
        let (outcome, output) = run_session(&card_file, &script);

        assert_eq!(outcome, Ok(SessionOutcome::Exited));
        assert_eq!(output.matches("Invalid card details. Restarting.").count(), 1);
        assert_eq!(output.matches("Enter card number: ").count(), 2);
    }

    #[test]
    fn test_expired_card_never_authenticates() {
        let (_dir, card_file) = stage_fixture("expired_card");
        let before = fs::read_to_string(&card_file).unwrap();

        // Correct details every time; input runs out after two attempts
        let script = "4000123412341234\n01/24\n123\n4000123412341234\n01/24\n123\n";
        let (outcome, output) = run_session(&card_file, script);

        assert_eq!(outcome, Err(AtmError::InputClosed));
        assert_eq!(output.matches("Invalid card details. Restarting.").count(), 2);
        assert_eq!(fs::read_to_string(&card_file).unwrap(), before);
    }

    #[test]
    fn test_malformed_card_file_is_fatal() {
        let (_dir, card_file) = stage_fixture("malformed");

        let (outcome, output) = run_session(&card_file, LOGIN);

        assert!(matches!(outcome, Err(AtmError::Persistence { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_negative_balance_file_is_fatal() {
        let (_dir, card_file) = stage_fixture("negative_balance");
        let before = fs::read_to_string(&card_file).unwrap();

        let (outcome, output) = run_session(&card_file, &format!("{}1\n7\n", LOGIN));

        match outcome {
            Err(AtmError::Persistence { message, .. }) => {
                assert_eq!(message, "negative GEL balance")
            }
            other => panic!("Expected persistence error, got {:?}", other),
        }
        assert!(output.is_empty());
        assert_eq!(fs::read_to_string(&card_file).unwrap(), before);
    }

    #[test]
    fn test_missing_card_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let (outcome, _) = run_session(&dir.path().join("cardData.json"), LOGIN);

        assert!(matches!(outcome, Err(AtmError::Persistence { .. })));
    }

    #[test]
    fn test_load_save_round_trip_of_fixture() {
        let (_dir, card_file) = stage_fixture("full_history");
        let store = JsonFileStore::new(&card_file);

        let record = store.load().unwrap();
        store.save(&record).unwrap();

        assert_eq!(store.load().unwrap(), record);
    }
}
