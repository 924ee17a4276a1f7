//! Simulator error types.
//!
//! Only loading can fail. Once a machine holds a valid image, execution
//! never signals an error: unsupported encodings execute as no-ops and
//! out-of-range memory accesses are absorbed by the memory model.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be read from disk.
    #[error("failed to read program image {}: {source}", .path.display())]
    Io {
        /// Path of the image that failed to load.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The program image holds more words than the instruction region.
    #[error("program too big: {words} words exceeds the {limit}-word instruction capacity")]
    ProgramTooBig {
        /// Number of words in the rejected image.
        words: usize,
        /// Instruction-region capacity in words.
        limit: usize,
    },
}
