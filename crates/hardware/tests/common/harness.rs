//! `TestContext`: a simulator wired to an in-memory console.

use ls8_core::Simulator;
use ls8_core::common::Fault;
use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::soc::devices::BufferConsole;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
///
/// Set `RUST_LOG=ls8_core=trace` to see per-instruction events in failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Owns a simulator whose program output is captured for assertions.
#[derive(Debug)]
pub struct TestContext {
    /// Simulator under test.
    pub sim: Simulator<BufferConsole>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a context with a custom configuration.
    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            sim: Simulator::with_console(config, BufferConsole::new()),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu<BufferConsole> {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu<BufferConsole> {
        &mut self.sim.cpu
    }

    /// Load a program image at address 0.
    pub fn load(mut self, image: &[u8]) -> Self {
        self.sim.cpu.load(image).unwrap();
        self
    }

    /// Run until `HLT` or a fault.
    pub fn run(&mut self) -> Result<u64, Fault> {
        self.sim.cpu.run()
    }

    /// Execute exactly `n` instructions, panicking on a fault.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.sim.cpu.step().unwrap();
        }
    }

    /// Everything the program has printed.
    pub fn output(&self) -> &str {
        self.sim.cpu.console().contents()
    }

    /// Reads a register, panicking on an invalid index.
    pub fn reg(&self, idx: usize) -> u8 {
        self.sim.cpu.regs.get(idx).unwrap()
    }

    /// Writes a register, panicking on an invalid index.
    pub fn set_reg(&mut self, idx: usize, val: u8) {
        self.sim.cpu.regs.set(idx, val).unwrap();
    }

    /// Current stack pointer (`R7`).
    pub fn sp(&self) -> u8 {
        self.sim.cpu.regs.sp()
    }

    /// Current program counter.
    pub fn pc(&self) -> usize {
        self.sim.cpu.pc
    }
}
