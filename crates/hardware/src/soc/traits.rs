//! Output device trait.
//!
//! This module defines the `Console` trait implemented by every sink the CPU
//! can print to. `PRN` and `PRA` format their output in the engine and hand
//! the resulting text to the console; the console only decides where it goes.

/// Character output device attached to the CPU.
pub trait Console {
    /// Returns a short name for this device (e.g., `"stdout"`).
    fn name(&self) -> &str;

    /// Emits already-formatted text.
    fn write_str(&mut self, text: &str);

    /// Flushes any buffered output (default: nothing to flush).
    fn flush(&mut self) {}
}
