//! Simulator: owns the CPU and drives a complete load-and-run cycle.

use std::path::Path;

use crate::common::{LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::soc::devices::{Console, StdoutConsole};

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<C: Console = StdoutConsole> {
    /// CPU architectural state, memory and console.
    pub cpu: Cpu<C>,
}

impl Simulator<StdoutConsole> {
    /// Creates a simulator printing to standard output.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator printing to `console`.
    pub fn with_console(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::with_console(config, console),
        }
    }

    /// Loads a program image file into memory.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]; memory is unchanged on error.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let image = loader::load_program(path)?;
        self.cpu.load(&image)?;
        Ok(image.len())
    }

    /// Loads program text (same format as a program file) into memory.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`] raised by [`loader::parse_program`].
    pub fn load_source(&mut self, source: &str) -> Result<usize, LoadError> {
        let image = loader::parse_program(source)?;
        self.cpu.load(&image)?;
        Ok(image.len())
    }

    /// Runs the loaded program until `HLT` or a fault.
    ///
    /// # Returns
    ///
    /// The number of instructions retired.
    ///
    /// # Errors
    ///
    /// [`SimError::Fault`] for the fault that stopped execution.
    pub fn run(&mut self) -> Result<u64, SimError> {
        Ok(self.cpu.run()?)
    }

    /// Loads `path` and runs it.
    ///
    /// # Errors
    ///
    /// [`SimError::Load`] if the image cannot be loaded (nothing is executed),
    /// otherwise [`SimError::Fault`] if execution faults.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<u64, SimError> {
        let _ = self.load_file(path)?;
        self.run()
    }
}
