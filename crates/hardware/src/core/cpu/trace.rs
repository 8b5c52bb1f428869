//! Debug output.
//!
//! Human-readable views of the machine state: a one-line trace printed before
//! each instruction when tracing is on, and a full dump printed after a fault.

use std::fmt::Write as _;

use super::Cpu;
use crate::common::constants::SP;
use crate::isa::disasm::disassemble_at;
use crate::soc::devices::Console;

/// Number of stack bytes shown by [`Cpu::dump_state`].
const DUMP_STACK_BYTES: usize = 8;

impl<C: Console> Cpu<C> {
    /// Formats the trace line for the instruction at the current PC.
    ///
    /// Layout: `TRACE: PC | OP A1 A2 | R0 R1 R2 R3 R4 R5 R6 R7 | FL | disassembly`,
    /// all values in two-digit hexadecimal. Cells past the end of memory show as `00`.
    pub fn trace_line(&self) -> String {
        let cell = |offset: usize| self.ram.peek(self.pc + offset).unwrap_or(0);
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            cell(0),
            cell(1),
            cell(2)
        );
        for reg in self.regs.snapshot() {
            let _ = write!(line, " {reg:02X}");
        }
        let _ = write!(
            line,
            " | {} | {}",
            self.fl,
            disassemble_at(&self.ram, self.pc)
        );
        line
    }

    /// Dumps PC, flags, registers and the top of the stack to stderr.
    pub fn dump_state(&self) {
        eprintln!("PC={:#04x}  FL={} ({:#04x})", self.pc, self.fl, self.fl.bits());
        eprintln!("next: {}", disassemble_at(&self.ram, self.pc));
        self.regs.dump();

        let sp = usize::from(self.regs.sp());
        let top: Vec<String> = (sp..sp + DUMP_STACK_BYTES)
            .take_while(|&addr| addr < usize::from(self.stack_base))
            .filter_map(|addr| self.ram.peek(addr))
            .map(|b| format!("{b:02X}"))
            .collect();
        eprintln!("stack (R{SP}={sp:#04x}): [{}]", top.join(" "));
    }
}
