// entroscan-entropy/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod scoring;

pub use entropy::{calculate_shannon_entropy, ByteHistogram, MAX_ENTROPY};
pub use scoring::{classify, Classification};

/// Common type definitions
pub type EntropyScore = f64;
