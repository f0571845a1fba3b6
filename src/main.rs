//! Dynaprompt harness: drives the prompt nodes from the command line.
//!
//! This is the main entry point for the `dynaprompt` CLI. It initialises
//! logging, parses arguments, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

use dynaprompt::cli::Cli;
use dynaprompt::{commands, exit_codes};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
