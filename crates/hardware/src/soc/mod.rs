//! Machine Components outside the core.
//!
//! This module organizes the parts of the simulated machine that the CPU talks
//! to: the 256-byte main memory and the console device used by `PRN`/`PRA`.

/// Console device implementations.
pub mod devices;

/// Main memory.
pub mod memory;

/// Device trait definitions.
pub mod traits;

pub use memory::Memory;
pub use traits::Console;
