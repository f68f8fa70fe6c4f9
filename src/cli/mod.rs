// CLI module
// Command-line configuration

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Each option falls back to its environment variable and then to its
/// documented default. On invalid arguments or `--help`, clap prints the
/// message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
