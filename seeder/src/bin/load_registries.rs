//! Run the `LoadRegistries` transaction against an in-memory ledger and emit
//! the resulting registries as JSON.
//!
//! This binary delegates to `secure_goods_seeder::cli`, keeping the command
//! behaviour testable without spawning a process.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use secure_goods_seeder::cli;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match cli::run(env::args_os(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "load-registries failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
