//! Core processor implementation.
//!
//! This module contains the LS8 CPU: the architectural registers, the ALU,
//! and the engine that runs the fetch-decode-execute loop over them.

/// Architectural state (register file, flags).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
