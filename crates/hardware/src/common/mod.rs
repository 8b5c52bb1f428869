//! Common utilities and types used throughout the LS8 simulator.
//!
//! This module provides the building blocks shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Address space, register, encoding and flag constants.
//! 2. **Error Handling:** Fault, load error and top-level error types.

/// Machine-wide constants.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP, STACK_RESET};
pub use error::{Fault, LoadError, SimError};
