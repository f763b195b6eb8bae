// entroscan/src/cli.rs
//! This file defines the command-line interface (CLI) for the entroscan
//! application.

use clap::Parser;
use entroscan_core::{DEFAULT_CHUNK_SIZE, DEFAULT_THRESHOLD, ScanConfig};
use log::LevelFilter;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "entroscan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Entropy scanner for potential ransomware detection.",
    long_about = "Computes the Shannon entropy of the leading bytes of each file and flags files at or above a threshold as possibly encrypted. Directories are only expanded with --recursive.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Files or directories to scan.
    #[arg(value_name = "PATH", required = true, num_args = 1.., help = "Files or directories to scan.")]
    pub paths: Vec<PathBuf>,

    /// Entropy threshold for the encryption warning.
    #[arg(
        long,
        short = 't',
        value_name = "BITS",
        default_value_t = DEFAULT_THRESHOLD,
        allow_negative_numbers = true,
        help = "Entropy threshold (bits per byte) for the encryption warning."
    )]
    pub threshold: f64,

    /// Recursively scan directories.
    #[arg(long, short = 'r', help = "Recursively scan directories.")]
    pub recursive: bool,

    /// Number of leading bytes sampled from each file.
    #[arg(
        long = "chunk-size",
        short = 'c',
        value_name = "BYTES",
        default_value_t = DEFAULT_CHUNK_SIZE as u64,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Number of leading bytes sampled from each file."
    )]
    pub chunk_size: u64,

    /// Follow symbolic links while walking directories.
    #[arg(long = "follow-links", short = 'L', help = "Follow symbolic links while walking directories.")]
    pub follow_links: bool,

    /// Exit non-zero when no file could be scanned.
    #[arg(long, help = "Exit with a non-zero code when every target failed or was skipped.")]
    pub strict: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Suppress all log output, including warnings.
    #[arg(long, short = 'q', help = "Suppress all log output on stderr.")]
    pub quiet: bool,
}

impl Cli {
    /// Builds the scan configuration described by the flags.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::default()
            .with_threshold(self.threshold)
            .with_chunk_size(usize::try_from(self.chunk_size).unwrap_or(usize::MAX))
            .recursive(self.recursive)
            .follow_links(self.follow_links)
    }

    /// Log level forced by the flags, if any.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
