//! Scan command implementation: runs the scan and decides the exit status.

use anyhow::{Context, Result};
use entroscan_core::{ScanSummary, scan_to_writer};
use log::{debug, info};
use std::io::Write;

use crate::cli::Cli;

/// Exit status when `--strict` is set and no file could be scanned.
pub const EXIT_NOTHING_SCANNED: u8 = 3;

/// Runs a full scan as described by `cli`, writing the report to `out`.
///
/// Returns the process exit status. Per-file errors and skipped paths never
/// make the run fail; with `--strict`, a run in which no file was scanned
/// successfully yields [`EXIT_NOTHING_SCANNED`].
pub fn run_scan<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> Result<u8> {
    info!("Starting entroscan operation.");
    let config = cli.scan_config();
    debug!("Resolved scan configuration: {:?}", config);

    let summary = scan_to_writer(config, cli.paths.iter(), out)
        .context("Scan aborted")?;

    let status = exit_status(&summary, cli.strict);
    debug!("Exiting with status {} ({:?})", status, summary);
    Ok(status)
}

/// Maps a finished scan onto a process exit status.
pub fn exit_status(summary: &ScanSummary, strict: bool) -> u8 {
    if strict && !summary.any_scanned() {
        EXIT_NOTHING_SCANNED
    } else {
        0
    }
}
