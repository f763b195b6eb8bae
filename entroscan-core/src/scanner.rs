//! Per-file scoring and the lazy scan pipeline.
//!
//! A [`FileScanner`] owns a validated [`ScanConfig`]. [`FileScanner::scan`]
//! pulls resolved paths one at a time, scores each target and yields a
//! [`ScanEvent`]. A failure is contained in the event for that file and never
//! stops the sequence.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use entroscan_entropy::{classify, ByteHistogram, Classification, EntropyScore};
use log::{debug, info, warn};

use crate::config::ScanConfig;
use crate::errors::EntroscanError;
use crate::resolve::{ResolvedPath, SkipReason, TargetResolver, Targets};
use crate::sampler::sample_file;

/// Entropy result for one file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileScore {
    pub entropy: EntropyScore,
    pub bytes_sampled: u64,
    pub classification: Classification,
}

/// Outcome of scanning a single target.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<FileScore, EntroscanError>,
}

/// One line of scan output.
#[derive(Debug)]
pub enum ScanEvent {
    Scanned(FileReport),
    Skipped { path: PathBuf, reason: SkipReason },
}

impl fmt::Display for ScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanEvent::Scanned(FileReport { path, outcome: Ok(score) }) => write!(
                f,
                "{}: Entropy = {:.2} → {}",
                path.display(),
                score.entropy,
                score.classification
            ),
            ScanEvent::Scanned(FileReport { path, outcome: Err(err) }) => {
                write!(f, "{}: ERROR - {}", path.display(), err.short_message())
            }
            ScanEvent::Skipped { path, .. } => {
                write!(f, "Skipping: {} (not found or not a file)", path.display())
            }
        }
    }
}

/// Running totals over a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files scored successfully.
    pub scanned: usize,
    /// Subset of `scanned` classified as possibly encrypted.
    pub flagged: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl ScanSummary {
    pub fn record(&mut self, event: &ScanEvent) {
        match event {
            ScanEvent::Scanned(FileReport { outcome: Ok(score), .. }) => {
                self.scanned += 1;
                if score.classification.is_flagged() {
                    self.flagged += 1;
                }
            }
            ScanEvent::Scanned(FileReport { outcome: Err(_), .. }) => self.failed += 1,
            ScanEvent::Skipped { .. } => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.scanned + self.failed + self.skipped
    }

    /// True when at least one file was scored.
    pub fn any_scanned(&self) -> bool {
        self.scanned > 0
    }
}

/// Scores files against a fixed configuration.
#[derive(Debug, Clone)]
pub struct FileScanner {
    config: ScanConfig,
}

impl FileScanner {
    /// Creates a scanner after validating `config`.
    pub fn new(config: ScanConfig) -> Result<Self, EntroscanError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Converts a sampled histogram into a score.
    pub fn score_histogram(&self, histogram: &ByteHistogram) -> FileScore {
        let entropy = histogram.entropy();
        FileScore {
            entropy,
            bytes_sampled: histogram.total(),
            classification: classify(entropy, self.config.threshold),
        }
    }

    /// Reads the prefix of `path` and scores it.
    pub fn scan_file(&self, path: &Path) -> FileReport {
        let outcome = sample_file(path, self.config.chunk_size)
            .map(|histogram| self.score_histogram(&histogram));

        match &outcome {
            Ok(score) => debug!(
                "Scored '{}': {:.4} bits/byte over {} bytes ({})",
                path.display(),
                score.entropy,
                score.bytes_sampled,
                score.classification
            ),
            Err(e) => warn!("{}", e),
        }

        FileReport {
            path: path.to_path_buf(),
            outcome,
        }
    }

    /// Lazily resolves `inputs` and scans every target, in resolution order.
    pub fn scan<I, P>(&self, inputs: I) -> Scan<'_>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let resolver = TargetResolver::new(inputs, &self.config);
        info!("Starting scan of {} input path(s).", resolver.inputs().len());
        Scan {
            scanner: self,
            targets: resolver.iter(),
        }
    }
}

/// Iterator returned by [`FileScanner::scan`].
#[derive(Debug)]
pub struct Scan<'a> {
    scanner: &'a FileScanner,
    targets: Targets,
}

impl Iterator for Scan<'_> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let event = match self.targets.next()? {
            ResolvedPath::Target(path) => ScanEvent::Scanned(self.scanner.scan_file(&path)),
            ResolvedPath::Skipped { path, reason } => {
                debug!("Skipping '{}': {}", path.display(), reason);
                ScanEvent::Skipped { path, reason }
            }
        };
        Some(event)
    }
}
