//! Execution units and functional components.
//!
//! The LS8 has a single execution unit, the ALU. Stack and branch handling
//! live with the CPU since they touch the program counter and memory directly.

/// Arithmetic Logic Unit for register operations.
pub mod alu;
