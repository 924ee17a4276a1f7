//! Execution stage.
//!
//! Computes the stage value for a decoded instruction: the ALU result, the
//! resolved next-PC input for branches and jumps, or the effective address
//! for loads and stores. The stage is pure: it reads the register file and
//! writes nothing (jump-and-link's link-register update happens in
//! writeback).
//!
//! Two reference behaviors are preserved deliberately (see DESIGN.md):
//! jump-register resolves through the link register rather than `rs`, and
//! the shifts take their shift amount from the `rt` register value rather
//! than the shamt field.

use crate::core::Machine;
use crate::isa::abi::REG_RA;
use crate::isa::instruction::{ImmediateOp, Instruction, Kind, RegisterOp};

/// Shift counts use the low five bits of the rt register value.
const SHIFT_MASK: u32 = 0x1F;

/// Computes the execution-stage value for `inst`.
#[must_use]
pub fn execute(inst: &Instruction, machine: &Machine) -> u32 {
    match inst.kind {
        Kind::Register { op, rs, rt, .. } => {
            let a = machine.regs.read(rs);
            let b = machine.regs.read(rt);
            match op {
                RegisterOp::Addu => a.wrapping_add(b),
                RegisterOp::And => a & b,
                // Reference behavior: jr resolves through the link register.
                RegisterOp::Jr => machine.regs.read(REG_RA),
                RegisterOp::Or => a | b,
                RegisterOp::Slt => u32::from((a as i32) < (b as i32)),
                RegisterOp::Sll => a << (b & SHIFT_MASK),
                RegisterOp::Srl => a >> (b & SHIFT_MASK),
                RegisterOp::Subu => a.wrapping_sub(b),
            }
        }
        Kind::Immediate { op, rs, rt, imm } => {
            let base = machine.regs.read(rs);
            let imm_bits = imm as u32;
            match op {
                ImmediateOp::Addiu => base.wrapping_add(imm_bits),
                ImmediateOp::Andi => base & imm_bits,
                // The immediate already holds the absolute branch target.
                ImmediateOp::Beq => {
                    if base == machine.regs.read(rt) {
                        imm_bits
                    } else {
                        inst.pc.wrapping_add(4)
                    }
                }
                // Not-taken bne falls back to the branch's own PC; the PC
                // updater adds the remaining 4.
                ImmediateOp::Bne => {
                    if base == machine.regs.read(rt) {
                        inst.pc
                    } else {
                        imm_bits
                    }
                }
                ImmediateOp::Lui => imm_bits << 16,
                ImmediateOp::Lw | ImmediateOp::Sw => base.wrapping_add(imm_bits),
                ImmediateOp::Ori => base | imm_bits,
            }
        }
        Kind::Jump { target, .. } => target,
        Kind::Unsupported => 0,
    }
}
