//! Bounded prefix sampling.
//!
//! Only the leading `limit` bytes of a file ever reach the histogram, so the
//! cost of scoring a file is independent of its size.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use entroscan_entropy::ByteHistogram;
use log::trace;

use crate::errors::EntroscanError;

const READ_BLOCK_SIZE: usize = 64 * 1024;

/// Feeds at most `limit` bytes from `reader` into a fresh histogram.
///
/// Short reads are retried until either `limit` bytes have been consumed or
/// the reader reports end of input.
pub fn sample_prefix<R: Read>(reader: R, limit: usize) -> io::Result<ByteHistogram> {
    let mut histogram = ByteHistogram::new();
    let mut reader = reader.take(limit as u64);
    let mut block = vec![0u8; READ_BLOCK_SIZE.min(limit.max(1))];

    loop {
        match reader.read(&mut block) {
            Ok(0) => break,
            Ok(n) => histogram.update(&block[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(histogram)
}

/// Opens `path` and samples its first `limit` bytes.
pub fn sample_file(path: &Path, limit: usize) -> Result<ByteHistogram, EntroscanError> {
    let file = File::open(path).map_err(|source| EntroscanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let histogram = sample_prefix(file, limit).map_err(|source| EntroscanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    trace!("Sampled {} bytes from '{}'", histogram.total(), path.display());
    Ok(histogram)
}
