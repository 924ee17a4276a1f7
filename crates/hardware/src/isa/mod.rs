//! Instruction set: bit extraction, encodings, decoding, and disassembly.

/// Register-convention indices ($sp, $ra).
pub mod abi;
/// Bit-field extraction helpers.
pub mod bits;
/// Instruction decoder.
pub mod decode;
/// Instruction disassembler.
pub mod disasm;
/// Function codes for Register-format instructions.
pub mod funct;
/// Decoded-instruction model.
pub mod instruction;
/// Primary opcodes.
pub mod opcodes;
