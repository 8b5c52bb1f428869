//! Simulation utilities and program loading.
//!
//! Provides the program image loader and the `Simulator` that ties loading
//! and execution together.

/// Program image parsing and file loading.
pub mod loader;

/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
