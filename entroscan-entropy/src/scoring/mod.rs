// entroscan-entropy/src/scoring/mod.rs
use core::fmt;

use crate::EntropyScore;

/// Verdict for a single sample compared against an entropy threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Entropy at or above the threshold.
    PossiblyEncrypted,
    Normal,
}

impl Classification {
    /// The label printed in scan reports.
    pub fn label(self) -> &'static str {
        match self {
            Classification::PossiblyEncrypted => "POSSIBLY ENCRYPTED",
            Classification::Normal => "Normal",
        }
    }

    pub fn is_flagged(self) -> bool {
        matches!(self, Classification::PossiblyEncrypted)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flags `entropy` when it reaches `threshold`.
pub fn classify(entropy: EntropyScore, threshold: EntropyScore) -> Classification {
    if entropy >= threshold {
        Classification::PossiblyEncrypted
    } else {
        Classification::Normal
    }
}
