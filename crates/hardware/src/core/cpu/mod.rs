//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, flags, program counter and the running flag.
//! 2. **Memory:** Owns the 256-byte address space the program is loaded into.
//! 3. **I/O:** Holds the console `PRN` and `PRA` print to.
//! 4. **Observability:** Tracks statistics and optional per-instruction tracing.
//!
//! A `Cpu` is an ordinary value: any number of them can exist side by side,
//! each running its own program.

/// Instruction execution and the fetch-decode-execute loop.
pub mod execution;

/// Stack discipline (push, pop, call, return).
pub mod stack;

/// Trace line and state dump for debugging.
pub mod trace;

use crate::common::LoadError;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;
use crate::soc::Memory;
use crate::soc::devices::{Console, StdoutConsole};
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
#[derive(Debug)]
pub struct Cpu<C: Console = StdoutConsole> {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: Gpr,
    /// Program Counter.
    pub pc: usize,
    /// Comparison flags.
    pub fl: Flags,
    /// Main memory.
    pub ram: Memory,
    /// `false` once `HLT` executes or a fault stops the run.
    pub running: bool,

    /// Output device for `PRN`/`PRA`.
    pub console: C,
    /// Print a trace line before each instruction.
    pub trace: bool,
    /// Reset value of `SP`; the stack is empty when `SP` reaches it.
    pub stack_base: u8,
    /// Address execution starts at after reset.
    pub start_pc: usize,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu<StdoutConsole> {
    /// Creates a CPU that prints to standard output.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, StdoutConsole::new())
    }
}

impl<C: Console> Cpu<C> {
    /// Creates a CPU attached to `console`.
    ///
    /// Memory and registers are zeroed, `SP` holds `config.stack.reset_sp`
    /// and the PC holds `config.general.start_pc`.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    /// * `console` - Device receiving program output.
    pub fn with_console(config: &Config, console: C) -> Self {
        let stack_base = config.stack.reset_sp;
        let start_pc = usize::from(config.general.start_pc);
        Self {
            regs: Gpr::with_sp(stack_base),
            pc: start_pc,
            fl: Flags::new(),
            ram: Memory::new(),
            running: true,
            console,
            trace: config.general.trace_instructions,
            stack_base,
            start_pc,
            stats: SimStats::default(),
        }
    }

    /// Writes a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the image does not fit in memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.ram.load(image)?;
        tracing::debug!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Returns registers, flags, PC and statistics to their reset state.
    ///
    /// Memory is left as it is so a loaded program can be run again.
    pub fn reset(&mut self) {
        self.regs.reset(self.stack_base);
        self.fl.clear();
        self.pc = self.start_pc;
        self.running = true;
        self.stats = SimStats::default();
    }

    /// `true` until `HLT` executes or a fault stops the run.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Shared access to the console.
    pub const fn console(&self) -> &C {
        &self.console
    }
}
