//! Docket: folder-backed order tracker.
//!
//! This is the main entry point for the `docket` CLI. It sets up diagnostic
//! logging, parses arguments, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod lifecycle;
pub mod ordering;
pub mod record;
pub mod store;
#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

/// Diagnostics go to stderr so command output on stdout stays clean.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
