// entroscan-entropy/src/entropy/mod.rs
use libm::log2;

use crate::EntropyScore;

/// Upper bound of the entropy of a byte sequence (256 equiprobable symbols).
pub const MAX_ENTROPY: EntropyScore = 8.0;

/// Frequency of every byte value within a sample.
///
/// The sum of all counts always equals [`ByteHistogram::total`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [u64; 256],
    total: u64,
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; 256],
            total: 0,
        }
    }

    /// Builds a histogram over a byte slice in a single pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut histogram = Self::new();
        histogram.update(data);
        histogram
    }

    /// Adds more bytes to the sample.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    /// Number of occurrences of `byte`.
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Number of bytes sampled.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Shannon entropy of the sample in bits per byte.
    ///
    /// An empty sample yields 0.0.
    pub fn entropy(&self) -> EntropyScore {
        if self.total == 0 {
            return 0.0;
        }

        let len = self.total as f64;
        let mut entropy = 0.0;

        for &count in self.counts.iter() {
            if count > 0 {
                let p = count as f64 / len;
                entropy -= p * log2(p);
            }
        }

        // Rounding may overshoot either bound by an ulp
        if entropy <= 0.0 {
            0.0
        } else {
            entropy.min(MAX_ENTROPY)
        }
    }
}

/// Calculates the Shannon entropy of a byte slice.
///
/// Returns the entropy in bits per byte, within `[0.0, 8.0]`.
pub fn calculate_shannon_entropy(data: &[u8]) -> EntropyScore {
    ByteHistogram::from_bytes(data).entropy()
}
