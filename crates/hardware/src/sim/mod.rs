//! Simulation setup: program-image loading.

/// Program-image loader.
pub mod loader;
