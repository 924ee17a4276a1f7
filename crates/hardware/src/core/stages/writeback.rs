//! Register-writeback stage.
//!
//! Commits the stage value to the register file and reports the changed
//! register, if any. Register-format operations write `rd`; Immediate-format
//! operations that define a result write `rt`. Jump-and-link performs its
//! single link-register write here: `$ra = pc + 4`.

use crate::core::Machine;
use crate::isa::abi::REG_RA;
use crate::isa::instruction::{ImmediateOp, Instruction, JumpOp, Kind, RegisterOp};

/// Commits `value` for `inst`, returning the changed register index.
pub fn write_back(inst: &Instruction, value: u32, machine: &mut Machine) -> Option<usize> {
    match inst.kind {
        Kind::Register {
            op: RegisterOp::Jr, ..
        } => None,
        Kind::Register { rd, .. } => {
            machine.regs.write(rd, value);
            Some(rd)
        }
        Kind::Immediate { op, rt, .. } => match op {
            ImmediateOp::Addiu
            | ImmediateOp::Andi
            | ImmediateOp::Lui
            | ImmediateOp::Lw
            | ImmediateOp::Ori => {
                machine.regs.write(rt, value);
                Some(rt)
            }
            ImmediateOp::Beq | ImmediateOp::Bne | ImmediateOp::Sw => None,
        },
        Kind::Jump {
            op: JumpOp::Jal, ..
        } => {
            machine.regs.write(REG_RA, inst.pc.wrapping_add(4));
            Some(REG_RA)
        }
        Kind::Jump { op: JumpOp::J, .. } | Kind::Unsupported => None,
    }
}
