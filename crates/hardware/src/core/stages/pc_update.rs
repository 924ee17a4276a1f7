//! Program-counter update stage.
//!
//! Resolves control flow from the execution-stage value. The additive
//! constant differs between beq (`pc = result`) and bne
//! (`pc = result + 4`); the asymmetry is reference behavior, preserved
//! exactly (see DESIGN.md). Everything else, unsupported encodings
//! included, advances by 4.

use crate::core::Machine;
use crate::isa::instruction::{ImmediateOp, Instruction, Kind, RegisterOp};

/// Updates the machine PC after executing `inst`.
pub fn update_pc(inst: &Instruction, result: u32, machine: &mut Machine) {
    machine.pc = match inst.kind {
        Kind::Immediate {
            op: ImmediateOp::Beq,
            ..
        } => result,
        Kind::Immediate {
            op: ImmediateOp::Bne,
            ..
        } => result.wrapping_add(4),
        Kind::Register {
            op: RegisterOp::Jr, ..
        }
        | Kind::Jump { .. } => result,
        _ => machine.pc.wrapping_add(4),
    };
}
