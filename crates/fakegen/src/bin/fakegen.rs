//! Command-line entry point printing fake data.
//!
//! This binary delegates to `fakegen::cli` for generation and output, keeping
//! the behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fakegen::cli::{CliArgs, CliError, load_settings, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match execute(&CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(args: &CliArgs) -> Result<(), CliError> {
    let settings = load_settings()?;
    run(args, &settings, &mut io::stdout().lock())
}
