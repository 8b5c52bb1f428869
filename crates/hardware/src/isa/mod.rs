//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS8 opcode encodings, the decoded instruction types, the
//! decoder that fetches operands from memory, and a disassembler.

/// Instruction decoding from memory.
pub mod decode;

/// Instruction disassembler for trace output and diagnostics.
pub mod disasm;

/// Opcode enumeration, field extraction and decoded instruction structure.
pub mod instruction;

/// Opcode byte constants.
pub mod opcodes;

pub use instruction::{Instruction, Opcode};
