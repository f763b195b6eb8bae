// entroscan-core/src/lib.rs
//! # entroscan Core Library
//!
//! `entroscan-core` provides the platform-independent logic behind the
//! `entroscan` CLI: resolving input paths into scan targets, sampling a
//! bounded prefix of each file, and classifying the sample by its Shannon
//! entropy. The entropy primitives themselves live in `entroscan-entropy`.
//!
//! ## Modules
//!
//! * `config`: Defines [`ScanConfig`] with the threshold, prefix size and traversal options.
//! * `errors`: Defines [`EntroscanError`], the structured error type of the library.
//! * `resolve`: Turns input paths into a lazy sequence of [`ResolvedPath`]s.
//! * `sampler`: Reads at most `chunk_size` leading bytes into a histogram.
//! * `scanner`: Defines [`FileScanner`], per-file [`FileReport`]s and the [`ScanSummary`].
//! * `headless`: One-shot convenience wrapper that writes a full report to any sink.
//!
//! ## Usage Example
//!
//! ```rust
//! use entroscan_core::{scan_to_writer, ScanConfig};
//!
//! let mut report = Vec::new();
//! let summary = scan_to_writer(ScanConfig::default(), ["nope.bin"], &mut report).unwrap();
//!
//! assert_eq!(summary.skipped, 1);
//! assert_eq!(
//!     String::from_utf8(report).unwrap(),
//!     "Skipping: nope.bin (not found or not a file)\n"
//! );
//! ```
//!
//! ## Error Handling
//!
//! Per-file failures are captured in the [`FileReport`] for that file and never
//! abort a scan. Fallible entry points return [`EntroscanError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod headless;
pub mod resolve;
pub mod sampler;
pub mod scanner;

/// Re-exports the scan configuration and its defaults.
pub use config::{ScanConfig, DEFAULT_CHUNK_SIZE, DEFAULT_THRESHOLD};

/// Re-exports the custom error type for clear error reporting.
pub use errors::EntroscanError;

pub use resolve::{ResolvedPath, SkipReason, TargetResolver, Targets};
pub use sampler::{sample_file, sample_prefix};
pub use scanner::{FileReport, FileScanner, FileScore, Scan, ScanEvent, ScanSummary};
pub use headless::scan_to_writer;

/// Re-exports the entropy primitives so callers need only one dependency.
pub use entroscan_entropy::{calculate_shannon_entropy, classify, ByteHistogram, Classification};
