//! Instruction disassembler.
//!
//! Converts a decoded instruction into MIPS assembly text for the
//! per-instruction trace. Registers print numerically (`$8`); branch and
//! jump operands print as the absolute target addresses computed at decode
//! time, in 8-digit hex.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::{decode, disasm};
//!
//! let inst = decode::decode(0x24010005, 0x0040_0000); // addiu $1, $0, 5
//! assert_eq!(disasm::disassemble(&inst), "addiu $1, $0, 5");
//! ```

use crate::isa::instruction::{ImmediateOp, Instruction, JumpOp, Kind, RegisterOp};

/// Renders a decoded instruction as assembly text.
///
/// Returns a line like `"addu $8, $9, $10"`, or `"unknown"` for unsupported
/// encodings.
#[must_use]
pub fn disassemble(inst: &Instruction) -> String {
    match inst.kind {
        Kind::Register { op, rs, rt, rd, .. } => match op {
            RegisterOp::Jr => format!("jr ${rs}"),
            _ => format!("{} ${rd}, ${rs}, ${rt}", register_mnemonic(op)),
        },
        Kind::Immediate { op, rs, rt, imm } => match op {
            ImmediateOp::Addiu => format!("addiu ${rt}, ${rs}, {imm}"),
            ImmediateOp::Andi => format!("andi ${rt}, ${rs}, {imm}"),
            ImmediateOp::Ori => format!("ori ${rt}, ${rs}, {imm}"),
            ImmediateOp::Lui => format!("lui ${rt}, {imm}"),
            ImmediateOp::Beq => format!("beq ${rs}, ${rt}, {:#010x}", imm as u32),
            ImmediateOp::Bne => format!("bne ${rs}, ${rt}, {:#010x}", imm as u32),
            ImmediateOp::Lw => format!("lw ${rt}, {imm}(${rs})"),
            ImmediateOp::Sw => format!("sw ${rt}, {imm}(${rs})"),
        },
        Kind::Jump { op, target } => match op {
            JumpOp::J => format!("j {target:#010x}"),
            JumpOp::Jal => format!("jal {target:#010x}"),
        },
        Kind::Unsupported => "unknown".to_string(),
    }
}

/// Mnemonic for a three-operand Register-format operation.
fn register_mnemonic(op: RegisterOp) -> &'static str {
    match op {
        RegisterOp::Addu => "addu",
        RegisterOp::And => "and",
        RegisterOp::Or => "or",
        RegisterOp::Slt => "slt",
        RegisterOp::Sll => "sll",
        RegisterOp::Srl => "srl",
        RegisterOp::Subu => "subu",
        // Rendered by the caller with its single-operand form.
        RegisterOp::Jr => "jr",
    }
}
