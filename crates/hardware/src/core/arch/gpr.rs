//! LS8 General-Purpose Register File.
//!
//! This module implements the eight 8-bit registers of the LS8. It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7`.
//! 2. **Invariant Enforcement:** Rejects indices outside `[0, 7]`; values are bytes by type,
//!    so every write is already truncated to 8 bits.
//! 3. **Stack Pointer Alias:** `R7` doubles as the stack pointer.
//! 4. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::Fault;
use crate::common::constants::{REGISTER_COUNT, SP, STACK_RESET};

/// General-Purpose Register file.
///
/// `R7` holds the stack pointer by software convention only; the hardware
/// treats it like any other register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a register file with all registers zeroed and `SP` at its reset value.
    pub const fn new() -> Self {
        Self::with_sp(STACK_RESET)
    }

    /// Creates a register file with all registers zeroed and `SP` set to `sp`.
    pub const fn with_sp(sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP] = sp;
        Self { regs }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidRegister`] if `idx` is out of range.
    pub fn get(&self, idx: usize) -> Result<u8, Fault> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Fault::InvalidRegister(idx))
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 8-bit value to write.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidRegister`] if `idx` is out of range.
    pub fn set(&mut self, idx: usize, val: u8) -> Result<(), Fault> {
        let reg = self
            .regs
            .get_mut(idx)
            .ok_or(Fault::InvalidRegister(idx))?;
        *reg = val;
        Ok(())
    }

    /// Returns the stack pointer (`R7`).
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer (`R7`).
    pub const fn set_sp(&mut self, sp: u8) {
        self.regs[SP] = sp;
    }

    /// Zeroes every register and sets `SP` to `sp`.
    pub fn reset(&mut self, sp: u8) {
        *self = Self::with_sp(sp);
    }

    /// Returns a copy of all eight registers.
    pub const fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    /// Dumps the contents of all registers to stderr.
    ///
    /// Displays registers in pairs with decimal and hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..REGISTER_COUNT).step_by(2) {
            eprintln!(
                "R{}={:>3} ({:#04x})  R{}={:>3} ({:#04x})",
                i,
                self.regs[i],
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                self.regs[i + 1]
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
