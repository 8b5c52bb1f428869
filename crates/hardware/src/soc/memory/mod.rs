//! Main Memory.
//!
//! This module implements the LS8 address space. It provides:
//! 1. **Storage:** 256 zero-initialised 8-bit cells.
//! 2. **Checked Access:** Reads and writes that fault outside `[0, 255]`.
//! 3. **Image Loading:** A bulk write used once, before execution starts.

use crate::common::constants::MEMORY_SIZE;
use crate::common::{Fault, LoadError};

/// The 256-byte LS8 address space.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a new memory with every cell set to zero.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte stored at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if `addr` is not in `[0, 255]`.
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(Fault::AddressOutOfRange(addr))
    }

    /// Writes `val` to the cell at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if `addr` is not in `[0, 255]`.
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(Fault::AddressOutOfRange(addr))?;
        *cell = val;
        Ok(())
    }

    /// Reads `addr` without faulting; used by diagnostics that must not fail.
    pub fn peek(&self, addr: usize) -> Option<u8> {
        self.cells.get(addr).copied()
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// Cells past the end of the image are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the image exceeds the address space.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let dest = self
            .cells
            .get_mut(..image.len())
            .ok_or(LoadError::ProgramTooLarge { len: image.len() })?;
        dest.copy_from_slice(image);
        Ok(())
    }

    /// Returns the full contents of memory.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_cells", &used)
            .finish()
    }
}
