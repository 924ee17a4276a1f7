//! Flat word-addressed simulated memory.
//!
//! A contiguous run of 32-bit words starting at
//! [`TEXT_BASE`](crate::common::constants::TEXT_BASE), instruction region
//! first, data region after. Byte addresses translate to word indices with
//! truncating division, so unaligned addresses resolve to the enclosing
//! word. Out-of-range reads return 0 and out-of-range writes are ignored;
//! neither raises a fault.

use crate::common::constants::{DATA_BASE, MEM_TOP, MEM_WORDS, TEXT_BASE, WORD_BYTES};

/// Simulated instruction and data memory.
#[derive(Debug, Clone)]
pub struct Memory {
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zeroed memory covering the full simulated range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: vec![0; MEM_WORDS],
        }
    }

    /// Translates a byte address to a word index. Addresses below the base
    /// wrap to an index no access will accept.
    fn index(addr: u32) -> usize {
        (addr.wrapping_sub(TEXT_BASE) / WORD_BYTES) as usize
    }

    /// Reads the word holding `addr`. Addresses outside the simulated range
    /// read as 0.
    #[must_use]
    pub fn read(&self, addr: u32) -> u32 {
        self.words.get(Self::index(addr)).copied().unwrap_or(0)
    }

    /// Writes `val` to the word holding `addr` if it falls inside the
    /// simulated range. Returns whether the write landed.
    pub fn write(&mut self, addr: u32, val: u32) -> bool {
        if (TEXT_BASE..MEM_TOP).contains(&addr) {
            self.words[Self::index(addr)] = val;
            true
        } else {
            false
        }
    }

    /// Copies a program image to the bottom of memory. The loader bounds
    /// images to the instruction capacity before this is called.
    pub fn load_words(&mut self, image: &[u32]) {
        self.words[..image.len()].copy_from_slice(image);
    }

    /// Iterates the nonzero words of the data region as `(address, value)`
    /// pairs, in address order.
    pub fn nonzero_data(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (DATA_BASE..MEM_TOP)
            .step_by(WORD_BYTES as usize)
            .filter_map(|addr| {
                let val = self.read(addr);
                (val != 0).then_some((addr, val))
            })
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
