use crate::io::json_store::DEFAULT_CARD_FILE;
use crate::logging::{DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use clap::Parser;
use std::path::PathBuf;

/// Single-card ATM simulator
#[derive(Parser, Debug)]
#[command(name = "atm-simulator")]
#[command(about = "Single-card ATM simulator backed by a JSON card file", long_about = None)]
pub struct CliArgs {
    /// Card data file holding the account record
    #[arg(
        long = "card-file",
        env = "ATM_CARD_FILE",
        value_name = "PATH",
        default_value = DEFAULT_CARD_FILE,
        help = "Path to the JSON card data file"
    )]
    pub card_file: PathBuf,

    /// Diagnostic log file, opened in append mode
    #[arg(
        long = "log-file",
        env = "ATM_LOG_FILE",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "Path to the append-only diagnostic log"
    )]
    pub log_file: PathBuf,

    /// Log filter directive
    #[arg(
        long = "log-level",
        env = "ATM_LOG",
        value_name = "FILTER",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter, e.g. 'info' or 'atm_simulator=debug'"
    )]
    pub log_level: String,
}
