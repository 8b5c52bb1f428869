//! Console devices.
//!
//! Two implementations of [`Console`]:
//! 1. **`StdoutConsole`:** Forwards program output to the process's stdout.
//! 2. **`BufferConsole`:** Captures output in memory for tests and embedding.

use std::io::{self, Write};

use crate::soc::traits::Console;

/// Console that writes to standard output.
///
/// Output is flushed after every newline and on [`Console::flush`], so `PRA`
/// characters without a trailing newline still appear when the program halts.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Creates a new stdout console.
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn name(&self) -> &str {
        "stdout"
    }

    fn write_str(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(text.as_bytes()) {
            tracing::warn!(error = %e, "console write failed");
            return;
        }
        if text.ends_with('\n') {
            if let Err(e) = out.flush() {
                tracing::warn!(error = %e, "console flush failed");
            }
        }
    }

    fn flush(&mut self) {
        if let Err(e) = io::stdout().flush() {
            tracing::warn!(error = %e, "console flush failed");
        }
    }
}

/// Console that records everything written to it.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    buffer: String,
}

impl BufferConsole {
    /// Creates an empty capture buffer.
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Returns everything written so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Returns the captured output split into lines.
    pub fn lines(&self) -> Vec<&str> {
        self.buffer.lines().collect()
    }

    /// Discards captured output.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Console for BufferConsole {
    fn name(&self) -> &str {
        "buffer"
    }

    fn write_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
