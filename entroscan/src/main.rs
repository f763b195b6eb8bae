// entroscan/src/main.rs
//! entroscan entry point.
//!
//! Parses arguments, initializes logging and runs the scan against stdout.

use anyhow::Result;
use clap::Parser;
use entroscan::cli::Cli;
use entroscan::{logger, run_scan};
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logger::init_logger(args.log_level());

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let status = run_scan(&args, &mut writer)?;

    Ok(ExitCode::from(status))
}
