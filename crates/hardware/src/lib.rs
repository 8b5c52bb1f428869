//! LS8 instruction-set simulator library.
//!
//! This crate implements a simulator for the LS8, a small 8-bit educational
//! architecture, with the following:
//! 1. **Core:** Eight 8-bit registers (`R7` is the stack pointer), a `00000LGE` flags
//!    register, the ALU, and the fetch-decode-execute loop.
//! 2. **Memory:** A 256-byte address space holding the program and the stack.
//! 3. **ISA:** Opcode encodings, decoding, and a disassembler.
//! 4. **SoC:** Main memory and the console `PRN`/`PRA` print to.
//! 5. **Simulation:** Program loader, configuration, and statistics collection.
//!
//! ```
//! use ls8_core::{Config, Simulator};
//! use ls8_core::soc::devices::BufferConsole;
//!
//! let program = "
//!     10000010 # LDI R0,8
//!     00000000
//!     00001000
//!     01000111 # PRN R0
//!     00000000
//!     00000001 # HLT
//! ";
//!
//! let mut sim = Simulator::with_console(&Config::default(), BufferConsole::new());
//! let _ = sim.load_source(program).unwrap();
//! let _ = sim.run().unwrap();
//! assert_eq!(sim.cpu.console().contents(), "8\n");
//! ```

/// Common types and constants (faults, load errors, machine constants).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (registers, flags, ALU, execution loop, stack).
pub mod core;
/// Instruction set (opcodes, decode, disassembler).
pub mod isa;
/// Program loader and top-level simulator.
pub mod sim;
/// Machine components outside the core (memory, console).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, console and stats.
pub use crate::core::Cpu;
/// Top-level simulator; loads a program and runs it.
pub use crate::sim::Simulator;
