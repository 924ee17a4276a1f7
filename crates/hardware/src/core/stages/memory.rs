//! Memory-access stage.
//!
//! Loads and stores treat the execution-stage value as an effective byte
//! address. Stores outside the simulated range are silently ignored;
//! out-of-range loads read as 0. Instructions without a memory access pass
//! the execution value through unchanged.

use crate::core::Machine;
use crate::isa::instruction::{ImmediateOp, Instruction, Kind};

/// Performs the memory access for `inst`, if any.
///
/// Returns the stage value (the loaded word for lw, 0 for sw, the execution
/// value unchanged otherwise) and the changed memory address when a store
/// landed.
pub fn access_memory(
    inst: &Instruction,
    result: u32,
    machine: &mut Machine,
) -> (u32, Option<u32>) {
    match inst.kind {
        Kind::Immediate {
            op: ImmediateOp::Lw,
            ..
        } => (machine.memory.read(result), None),
        Kind::Immediate {
            op: ImmediateOp::Sw,
            rt,
            ..
        } => {
            let val = machine.regs.read(rt);
            if machine.memory.write(result, val) {
                (0, Some(result))
            } else {
                tracing::debug!("store to {result:#010x} outside simulated memory ignored");
                (0, None)
            }
        }
        _ => (result, None),
    }
}
