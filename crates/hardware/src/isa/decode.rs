//! MIPS instruction decoder.
//!
//! Classifies a raw 32-bit word into the Register, Immediate, or Jump
//! format and populates the decoded fields. Sign-extension of immediates
//! happens here, as does absolutizing branch and jump targets: branches
//! store `pc + 4 + (offset << 2)`, jumps store
//! `(target_field << 2) | (pc & 0xF000_0000)`.
//!
//! Decoding never fails fatally; unrecognized encodings decode to
//! [`Kind::Unsupported`], which every downstream stage treats as a no-op
//! that advances the PC by 4.

use crate::isa::bits::field;
use crate::isa::instruction::{ImmediateOp, Instruction, JumpOp, Kind, RegisterOp};
use crate::isa::opcodes;

/// Low bit of the primary opcode field.
const OPCODE_LO: u32 = 26;
/// High bit of the primary opcode field.
const OPCODE_HI: u32 = 31;

/// Low bit of the rs register field.
const RS_LO: u32 = 21;
/// High bit of the rs register field.
const RS_HI: u32 = 25;

/// Low bit of the rt register field.
const RT_LO: u32 = 16;
/// High bit of the rt register field.
const RT_HI: u32 = 20;

/// Low bit of the rd register field.
const RD_LO: u32 = 11;
/// High bit of the rd register field.
const RD_HI: u32 = 15;

/// Low bit of the shift-amount field.
const SHAMT_LO: u32 = 6;
/// High bit of the shift-amount field.
const SHAMT_HI: u32 = 10;

/// Low bit of the funct field.
const FUNCT_LO: u32 = 0;
/// High bit of the funct field.
const FUNCT_HI: u32 = 5;

/// Low bit of the 16-bit immediate field.
const IMM_LO: u32 = 0;
/// High bit of the 16-bit immediate field.
const IMM_HI: u32 = 15;

/// Low bit of the 26-bit jump target field.
const TARGET_LO: u32 = 0;
/// High bit of the 26-bit jump target field.
const TARGET_HI: u32 = 25;

/// High-order PC bits preserved across a jump (the current 256 MB segment).
const PC_SEGMENT_MASK: u32 = 0xF000_0000;

/// Decodes a raw instruction word fetched at `pc`.
///
/// Pure function of its arguments; `pc` is needed only to absolutize branch
/// and jump targets, never to select the format.
#[must_use]
pub fn decode(raw: u32, pc: u32) -> Instruction {
    let opcode = field(raw, OPCODE_LO, OPCODE_HI);

    let kind = if opcode == opcodes::OP_SPECIAL {
        decode_register(raw)
    } else if let Some(op) = ImmediateOp::from_opcode(opcode) {
        decode_immediate(raw, pc, op)
    } else if let Some(op) = JumpOp::from_opcode(opcode) {
        Kind::Jump {
            op,
            target: jump_target(raw, pc),
        }
    } else {
        Kind::Unsupported
    };

    if matches!(kind, Kind::Unsupported) {
        tracing::debug!("unsupported instruction encoding {raw:#010x} at pc {pc:#010x}");
    }

    Instruction {
        raw,
        pc,
        opcode,
        kind,
    }
}

/// Decodes a Register-format word: one shared field extraction, then a
/// dispatch over the funct code.
fn decode_register(raw: u32) -> Kind {
    let funct = field(raw, FUNCT_LO, FUNCT_HI);
    match RegisterOp::from_funct(funct) {
        Some(op) => Kind::Register {
            op,
            rs: field(raw, RS_LO, RS_HI) as usize,
            rt: field(raw, RT_LO, RT_HI) as usize,
            rd: field(raw, RD_LO, RD_HI) as usize,
            shamt: field(raw, SHAMT_LO, SHAMT_HI),
            funct,
        },
        None => Kind::Unsupported,
    }
}

/// Decodes an Immediate-format word. The 16-bit field is sign-extended for
/// every opcode; branches additionally turn it into an absolute target.
fn decode_immediate(raw: u32, pc: u32, op: ImmediateOp) -> Kind {
    let offset = sign_extend_16(field(raw, IMM_LO, IMM_HI));
    let imm = if op.is_branch() {
        branch_target(pc, offset)
    } else {
        offset
    };
    Kind::Immediate {
        op,
        rs: field(raw, RS_LO, RS_HI) as usize,
        rt: field(raw, RT_LO, RT_HI) as usize,
        imm,
    }
}

/// Sign-extends a 16-bit value to 32 bits.
fn sign_extend_16(val: u32) -> i32 {
    (val as i32) << 16 >> 16
}

/// Computes the absolute branch target: word-aligned offset from `pc + 4`.
fn branch_target(pc: u32, offset: i32) -> i32 {
    pc.wrapping_add(4).wrapping_add((offset as u32) << 2) as i32
}

/// Computes the absolute jump target: the 26-bit field shifted into word
/// alignment, joined with the current PC's 256 MB segment.
fn jump_target(raw: u32, pc: u32) -> u32 {
    (field(raw, TARGET_LO, TARGET_HI) << 2) | (pc & PC_SEGMENT_MASK)
}
