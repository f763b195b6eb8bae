//! Convenience wrapper for running a complete scan without the CLI.
//!
//! Resolves inputs, scores every target and writes one report line per
//! event to any `Write` sink.
//!
//! License: MIT OR Apache-2.0

use std::io::Write;
use std::path::PathBuf;

use log::info;

use crate::config::ScanConfig;
use crate::errors::EntroscanError;
use crate::scanner::{FileScanner, ScanSummary};

/// Scans `inputs` with `config`, writing report lines to `out`.
///
/// Per-file errors and skipped paths are reported in-line and counted in the
/// returned summary. Only an invalid configuration or a failed write to `out`
/// aborts the run.
pub fn scan_to_writer<I, P, W>(
    config: ScanConfig,
    inputs: I,
    out: &mut W,
) -> Result<ScanSummary, EntroscanError>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
    W: Write + ?Sized,
{
    let scanner = FileScanner::new(config)?;
    let mut summary = ScanSummary::default();

    for event in scanner.scan(inputs) {
        writeln!(out, "{}", event)?;
        summary.record(&event);
    }
    out.flush()?;

    info!(
        "Scan complete: {} scanned ({} flagged), {} failed, {} skipped.",
        summary.scanned, summary.flagged, summary.failed, summary.skipped
    );
    Ok(summary)
}
