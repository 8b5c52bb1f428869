//! Fault and Load Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Fault Representation:** Every fatal condition the execution engine can raise.
//! 2. **Load Errors:** Failures while reading a program image from disk.
//! 3. **Top-level Errors:** A single error type for callers driving a whole run.
//!
//! No fault is recoverable: the engine stops at the first one and reports it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while executing a program.
///
/// Faults carry the offending value (address, register index, opcode) so the
/// diagnostic printed on termination identifies exactly what went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The byte fetched at `pc` is not a defined opcode.
    #[error("UnknownInstruction({opcode:#04x} at {pc:#04x})")]
    UnknownInstruction {
        /// The undefined opcode byte.
        opcode: u8,
        /// Address the byte was fetched from.
        pc: usize,
    },

    /// An ALU operation name with no implementation was requested.
    #[error("UnsupportedAluOperation({0})")]
    UnsupportedAluOperation(String),

    /// A memory access outside `[0, 255]`.
    #[error("AddressOutOfRange({0:#x})")]
    AddressOutOfRange(usize),

    /// A register index outside `[0, 7]`.
    #[error("InvalidRegister({0})")]
    InvalidRegister(usize),

    /// A push with the stack pointer already at address 0.
    #[error("StackOverflow(sp={sp:#04x})")]
    StackOverflow {
        /// Stack pointer at the time of the push.
        sp: u8,
    },

    /// A pop from an empty stack.
    #[error("StackUnderflow(sp={sp:#04x})")]
    StackUnderflow {
        /// Stack pointer at the time of the pop.
        sp: u8,
    },
}

/// Errors raised while turning a program image into memory contents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The program file exists but could not be read (permissions, a
    /// directory, or contents that are not UTF-8).
    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line did not contain a valid 8-bit binary literal.
    #[error("Invalid number '{token}' on line {line}")]
    MalformedLiteral {
        /// One-based line number in the source file.
        line: usize,
        /// The offending token after comment stripping.
        token: String,
    },

    /// The image holds more bytes than the address space.
    #[error("Program too large: {len} bytes (limit 256)")]
    ProgramTooLarge {
        /// Number of bytes in the image.
        len: usize,
    },
}

/// Error type for a complete load-and-run cycle.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program could not be loaded; no instruction ran.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Execution stopped on a fault.
    #[error("fatal fault: {0}")]
    Fault(#[from] Fault),
}
