//! I/O Devices.
//!
//! This module contains the output devices the CPU can be attached to.

/// Stdout and in-memory console implementations.
pub mod console;

pub use console::{BufferConsole, StdoutConsole};

pub use crate::soc::traits::Console;
