//! MIPS register-convention indices used by the simulator.

/// Register 0. Conventionally $zero; this simulator does not hardwire it.
pub const REG_ZERO: usize = 0;

/// Register 29, the stack pointer ($sp).
pub const REG_SP: usize = 29;

/// Register 31, the link register ($ra).
pub const REG_RA: usize = 31;
