//! Program-image loader.
//!
//! Program images are flat binaries of consecutive 32-bit big-endian words,
//! loaded at the bottom of the instruction region. A trailing partial word
//! is ignored, matching the reference loader's whole-word reads.

use std::fs;
use std::path::Path;

use crate::common::constants::TEXT_WORDS;
use crate::common::error::SimError;

/// Reads a program image from disk as host-order instruction words.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the file cannot be read, and
/// [`SimError::ProgramTooBig`] when the image exceeds the instruction
/// capacity.
pub fn read_image(path: &Path) -> Result<Vec<u32>, SimError> {
    let bytes = fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    if words.len() > TEXT_WORDS {
        return Err(SimError::ProgramTooBig {
            words: words.len(),
            limit: TEXT_WORDS,
        });
    }

    tracing::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
