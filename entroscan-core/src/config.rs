//! Configuration for a scan run.
//!
//! The threshold, prefix size and traversal options are passed into the
//! scanner explicitly; nothing here is process-global.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::errors::EntroscanError;

/// Entropy at or above which a file is flagged.
pub const DEFAULT_THRESHOLD: f64 = 7.0;

/// Number of leading bytes sampled from each file (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Options controlling path resolution and per-file sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Classification threshold in bits per byte.
    pub threshold: f64,
    /// Maximum number of bytes read from the start of each file.
    pub chunk_size: usize,
    /// Expand directories into the files beneath them.
    pub recursive: bool,
    /// Follow symbolic links while walking directories.
    pub follow_links: bool,
    /// Depth limit for directory walks. `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            recursive: false,
            follow_links: false,
            max_depth: None,
        }
    }
}

impl ScanConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Rejects settings the scanner cannot honour.
    pub fn validate(&self) -> Result<(), EntroscanError> {
        if self.chunk_size == 0 {
            return Err(EntroscanError::InvalidConfig(
                "chunk size must be at least 1 byte".to_string(),
            ));
        }
        if !self.threshold.is_finite() {
            return Err(EntroscanError::InvalidConfig(format!(
                "threshold must be a finite number, got {}",
                self.threshold
            )));
        }
        debug!("Scan configuration validated: {:?}", self);
        Ok(())
    }
}
