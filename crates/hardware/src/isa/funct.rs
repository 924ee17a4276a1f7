//! Function codes (bits 0-5) selecting the operation when the primary
//! opcode is [`OP_SPECIAL`](crate::isa::opcodes::OP_SPECIAL).

/// Shift left logical (SLL).
pub const FUNCT_SLL: u32 = 0x00;

/// Shift right logical (SRL).
pub const FUNCT_SRL: u32 = 0x02;

/// Jump register (JR).
pub const FUNCT_JR: u32 = 0x08;

/// Add unsigned (ADDU).
pub const FUNCT_ADDU: u32 = 0x21;

/// Subtract unsigned (SUBU).
pub const FUNCT_SUBU: u32 = 0x23;

/// Bitwise AND.
pub const FUNCT_AND: u32 = 0x24;

/// Bitwise OR.
pub const FUNCT_OR: u32 = 0x25;

/// Set on less than (SLT), signed comparison.
pub const FUNCT_SLT: u32 = 0x2a;
