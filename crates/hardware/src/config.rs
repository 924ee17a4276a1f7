//! Simulator configuration.
//!
//! Four booleans controlling output verbosity and interaction. The CLI
//! builds a `Config` from command-line flags or deserializes one from JSON;
//! none of the flags alter execution semantics.

use serde::Deserialize;

/// Output and interaction settings for a simulation run.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.interactive);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print the full register file after every instruction instead of only
    /// the register that changed.
    pub print_all_registers: bool,

    /// Print all nonzero data memory after every instruction instead of only
    /// the word that changed.
    pub print_all_memory: bool,

    /// Prompt before each instruction; an input line starting with `q` quits.
    pub interactive: bool,

    /// Enable debug logging.
    pub debugging: bool,
}
