//! Machine state and the per-instruction step loop.
//!
//! A [`Machine`] owns the register file, the flat memory, and the program
//! counter. [`Machine::step`] runs one instruction through fetch, decode,
//! execute, PC update, memory access, and writeback, and returns a [`Step`]
//! report of what changed. Machines are created at load time, mutated in
//! place every cycle, and dropped at process exit; nothing is global.

use crate::common::constants::{MEM_TOP, TEXT_BASE};
use crate::core::memory::Memory;
use crate::core::regs::RegisterFile;
use crate::core::stages;
use crate::isa::abi::REG_SP;
use crate::isa::decode;
use crate::isa::instruction::Instruction;

/// Report of one executed instruction.
#[derive(Debug, Clone)]
pub struct Step {
    /// The decoded instruction, carrying the raw word and the PC it ran at.
    pub inst: Instruction,
    /// PC after the instruction.
    pub next_pc: u32,
    /// Register written this cycle, if any.
    pub changed_reg: Option<usize>,
    /// Memory byte address written this cycle, if any.
    pub changed_mem: Option<u32>,
}

/// Complete machine state: register file, memory, and program counter.
#[derive(Debug, Clone)]
pub struct Machine {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Flat instruction and data memory.
    pub memory: Memory,
    /// Address of the next instruction to fetch.
    pub pc: u32,
}

impl Machine {
    /// Creates a machine with zeroed registers and memory, the stack pointer
    /// at the top of simulated memory, and the PC at the text base.
    #[must_use]
    pub fn new() -> Self {
        let mut regs = RegisterFile::new();
        regs.write(REG_SP, MEM_TOP);
        Self {
            regs,
            memory: Memory::new(),
            pc: TEXT_BASE,
        }
    }

    /// Copies a program image to the bottom of memory.
    pub fn load_image(&mut self, image: &[u32]) {
        self.memory.load_words(image);
    }

    /// Fetches the instruction word at `addr`.
    #[must_use]
    pub fn fetch(&self, addr: u32) -> u32 {
        self.memory.read(addr)
    }

    /// Executes one instruction and returns the step report.
    ///
    /// The stages run sequentially and atomically; there is no overlap
    /// between instructions.
    pub fn step(&mut self) -> Step {
        let pc = self.pc;
        let raw = self.fetch(pc);
        tracing::trace!("executing {raw:#010x} at pc {pc:#010x}");

        let inst = decode::decode(raw, pc);
        let value = stages::execute(&inst, self);
        stages::update_pc(&inst, value, self);
        let (value, changed_mem) = stages::access_memory(&inst, value, self);
        let changed_reg = stages::write_back(&inst, value, self);

        Step {
            inst,
            next_pc: self.pc,
            changed_reg,
            changed_mem,
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
