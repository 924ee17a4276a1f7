//! Simulated memory map.
//!
//! Memory is a single contiguous run of 32-bit words: an instruction region
//! at the bottom, a data region immediately after it. Byte addresses map to
//! word indices linearly (`index = (address - TEXT_BASE) / 4`).

/// Base byte address of the instruction region; the PC starts here.
pub const TEXT_BASE: u32 = 0x0040_0000;

/// Size of one memory word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Capacity of the instruction region in words; images larger than this are
/// rejected at load time.
pub const TEXT_WORDS: usize = 1024;

/// Capacity of the data region in words.
pub const DATA_WORDS: usize = 3072;

/// Total simulated memory in words.
pub const MEM_WORDS: usize = TEXT_WORDS + DATA_WORDS;

/// First byte address of the data region.
pub const DATA_BASE: u32 = TEXT_BASE + TEXT_WORDS as u32 * WORD_BYTES;

/// One past the last valid byte address; also the initial stack pointer.
pub const MEM_TOP: u32 = TEXT_BASE + MEM_WORDS as u32 * WORD_BYTES;
