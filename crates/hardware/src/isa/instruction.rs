//! Decoded-instruction model.
//!
//! A raw 32-bit word decodes into an [`Instruction`]: the raw word, the PC
//! it was fetched from, the 6-bit primary opcode, and a format-tagged
//! [`Kind`] holding the operation and its fields. One instance lives per
//! cycle; no history is retained.

use crate::isa::funct;
use crate::isa::opcodes;

/// Register-format operations, selected by the funct field when the primary
/// opcode is zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOp {
    /// Add unsigned (wrapping).
    Addu,
    /// Bitwise AND.
    And,
    /// Jump register.
    Jr,
    /// Bitwise OR.
    Or,
    /// Set on less than (signed comparison).
    Slt,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Subtract unsigned (wrapping).
    Subu,
}

impl RegisterOp {
    /// Maps a funct field to an operation; `None` for unrecognized codes.
    #[must_use]
    pub fn from_funct(f: u32) -> Option<Self> {
        match f {
            funct::FUNCT_ADDU => Some(Self::Addu),
            funct::FUNCT_AND => Some(Self::And),
            funct::FUNCT_JR => Some(Self::Jr),
            funct::FUNCT_OR => Some(Self::Or),
            funct::FUNCT_SLT => Some(Self::Slt),
            funct::FUNCT_SLL => Some(Self::Sll),
            funct::FUNCT_SRL => Some(Self::Srl),
            funct::FUNCT_SUBU => Some(Self::Subu),
            _ => None,
        }
    }
}

/// Immediate-format operations, selected by the primary opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmediateOp {
    /// Add immediate unsigned (wrapping).
    Addiu,
    /// AND immediate.
    Andi,
    /// Branch on equal.
    Beq,
    /// Branch on not equal.
    Bne,
    /// Load upper immediate.
    Lui,
    /// Load word.
    Lw,
    /// OR immediate.
    Ori,
    /// Store word.
    Sw,
}

impl ImmediateOp {
    /// Maps a primary opcode to an operation; `None` for unrecognized codes.
    #[must_use]
    pub fn from_opcode(op: u32) -> Option<Self> {
        match op {
            opcodes::OP_ADDIU => Some(Self::Addiu),
            opcodes::OP_ANDI => Some(Self::Andi),
            opcodes::OP_BEQ => Some(Self::Beq),
            opcodes::OP_BNE => Some(Self::Bne),
            opcodes::OP_LUI => Some(Self::Lui),
            opcodes::OP_LW => Some(Self::Lw),
            opcodes::OP_ORI => Some(Self::Ori),
            opcodes::OP_SW => Some(Self::Sw),
            _ => None,
        }
    }

    /// Whether the operation is a conditional branch. Branches store a
    /// pre-computed absolute target in the immediate field.
    #[must_use]
    pub fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne)
    }
}

/// Jump-format operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpOp {
    /// Jump.
    J,
    /// Jump and link.
    Jal,
}

impl JumpOp {
    /// Maps a primary opcode to an operation; `None` for unrecognized codes.
    #[must_use]
    pub fn from_opcode(op: u32) -> Option<Self> {
        match op {
            opcodes::OP_J => Some(Self::J),
            opcodes::OP_JAL => Some(Self::Jal),
            _ => None,
        }
    }
}

/// Format-tagged operands of a decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Register format: two source registers, a destination register, a
    /// shift amount, and the raw funct bits.
    Register {
        /// Selected operation.
        op: RegisterOp,
        /// First source register index.
        rs: usize,
        /// Second source register index.
        rt: usize,
        /// Destination register index.
        rd: usize,
        /// Shift amount field (bits 6-10).
        shamt: u32,
        /// Raw funct field (bits 0-5), recoverable verbatim.
        funct: u32,
    },

    /// Immediate format. `imm` holds the sign-extended 16-bit field, except
    /// for branches where it holds the pre-computed absolute target address.
    Immediate {
        /// Selected operation.
        op: ImmediateOp,
        /// Source register index.
        rs: usize,
        /// Target register index.
        rt: usize,
        /// Sign-extended immediate, or the absolute branch target.
        imm: i32,
    },

    /// Jump format with the pre-computed absolute target address.
    Jump {
        /// Selected operation.
        op: JumpOp,
        /// Absolute target address.
        target: u32,
    },

    /// Unrecognized encoding; executes as a no-op that advances the PC by 4.
    Unsupported,
}

/// One decoded instruction.
///
/// Decoding is a pure function of the raw word and the PC it was fetched
/// from. The record carries enough for disassembly, execution, PC update,
/// memory access, and writeback to proceed from it alone (plus register and
/// memory state for execution-time reads).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 32-bit instruction word.
    pub raw: u32,
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Primary opcode (bits 26-31).
    pub opcode: u32,
    /// Format tag and operands.
    pub kind: Kind,
}
