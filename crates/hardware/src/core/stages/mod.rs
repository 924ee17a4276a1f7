//! Sequential pipeline stages.
//!
//! The stages run in order for every instruction: execute, PC update,
//! memory access, writeback. Each is a free function over the decoded
//! instruction and the machine state; exactly one instruction is in flight
//! at a time, so there are no inter-stage latches.

mod execute;
mod memory;
mod pc_update;
mod writeback;

pub use execute::execute;
pub use memory::access_memory;
pub use pc_update::update_pc;
pub use writeback::write_back;
