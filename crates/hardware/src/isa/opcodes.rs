//! Primary opcodes (bits 26-31) of the supported MIPS subset.

/// Register-format instructions; the operation is selected by the funct field.
pub const OP_SPECIAL: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0x03;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add immediate unsigned (ADDIU).
pub const OP_ADDIU: u32 = 0x09;

/// AND immediate (ANDI).
pub const OP_ANDI: u32 = 0x0c;

/// OR immediate (ORI).
pub const OP_ORI: u32 = 0x0d;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0f;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2b;
