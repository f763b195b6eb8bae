//! errors.rs - Custom error types for the entroscan-core library.
//!
//! This module defines a structured error enum for the library. Per-file
//! failures carry the offending path so callers can report them and move on
//! to the next file.
//!
//! License: MIT OR APACHE 2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All possible error types in the `entroscan-core` library.
///
/// `#[non_exhaustive]` lets new variants be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EntroscanError {
    #[error("failed to open '{}': {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid scan configuration: {0}")]
    InvalidConfig(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] io::Error),
}

impl EntroscanError {
    /// The message shown on a per-file `ERROR` line.
    ///
    /// The path is already the first column of that line, so only the
    /// underlying cause is rendered.
    pub fn short_message(&self) -> String {
        match self {
            EntroscanError::Open { source, .. } | EntroscanError::Read { source, .. } => {
                source.to_string()
            }
            EntroscanError::Io(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}
