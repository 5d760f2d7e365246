//! PEAClock: configuration resolver for the epigenetic clock pipeline.
//!
//! This is the main entry point for the `peaclock` CLI. It parses arguments,
//! runs the resolution sequence, and handles errors with proper exit codes.
//! All fatal conditions surface here as typed errors; nothing deeper in the
//! crate terminates the process.

use chrono::Local;
use peaclock::cli::Cli;
use peaclock::{exit_codes, resolve, style};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!(
                "{}",
                style::cyan(&format!("Error: cannot determine working directory: {e}"))
            );
            return ExitCode::from(exit_codes::MISSING_RESOURCE as u8);
        }
    };

    match resolve::resolve(&cli, &cwd, Local::now()) {
        Ok(resolution) => {
            resolution.report();
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("{}", style::cyan(&format!("Error: {err}")));

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
