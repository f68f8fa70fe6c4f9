//! ATM Simulator CLI
//!
//! Interactive console ATM for the single card stored in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --card-file /path/to/cardData.json --log-file atm.log
//! ATM_CARD_FILE=/path/to/cardData.json cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (menu exit or rejected PIN)
//! - 1: Fatal error (card file unreadable or unwritable, log file unavailable, input closed)

use atm_simulator::{cli, logging};
use atm_simulator::{Console, JsonFileStore, Session, SystemClock};
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let log_guard = match logging::init(&args.log_file, &args.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("Application started");

    let store = JsonFileStore::new(&args.card_file);
    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(store, SystemClock, console);

    let result = session.run();
    info!("Application finished");

    if let Err(e) = result {
        error!("Session aborted: {}", e);
        eprintln!("Error: {}", e);
        drop(log_guard);
        process::exit(1);
    }
    drop(log_guard);
}
