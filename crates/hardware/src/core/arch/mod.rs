//! LS8 architectural state.
//!
//! This module contains the programmer-visible registers of the LS8.
//! It includes the following modules:
//! 1. **Flags:** The `00000LGE` comparison flags register.
//! 2. **GPRs:** The eight general-purpose registers, `R7` doubling as the stack pointer.

/// Comparison flags register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;
