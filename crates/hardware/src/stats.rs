//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the LS8 simulator. It provides:
//! 1. **Throughput:** Cycles, retired instructions, and host-side speed.
//! 2. **Instruction mix:** Counts by category (ALU, load, stack, branch, I/O, system).
//! 3. **Control flow:** Taken and not-taken conditional jumps, subroutine calls.
//! 4. **Stack:** Deepest stack reached during the run.

use std::fmt::Write as _;
use std::time::Instant;

use crate::isa::Opcode;

/// Simulation statistics structure.
///
/// The LS8 retires one instruction per cycle, so `cycles` and
/// `instructions_retired` only differ for a run that faulted mid-instruction.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total fetch-decode-execute cycles started.
    pub cycles: u64,
    /// Number of instructions that completed.
    pub instructions_retired: u64,

    /// `ADD` and `MUL`.
    pub inst_alu: u64,
    /// `CMP`.
    pub inst_compare: u64,
    /// `LDI`.
    pub inst_load: u64,
    /// `PUSH` and `POP`.
    pub inst_stack: u64,
    /// `JMP`, `JEQ`, `JNE`, `CALL` and `RET`.
    pub inst_branch: u64,
    /// `PRN` and `PRA`.
    pub inst_io: u64,
    /// `HLT`.
    pub inst_system: u64,

    /// Conditional jumps that were taken.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
    /// Subroutine calls executed.
    pub calls: u64,

    /// Largest number of bytes on the stack at any point.
    pub max_stack_depth: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_compare: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            calls: 0,
            max_stack_depth: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `report_sections` to include every section.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

impl SimStats {
    /// Records a retired instruction.
    ///
    /// # Arguments
    ///
    /// * `op` - The opcode that completed.
    /// * `taken` - For `JEQ`/`JNE`, whether the jump was taken; ignored otherwise.
    pub const fn record(&mut self, op: Opcode, taken: bool) {
        self.instructions_retired += 1;
        match op {
            Opcode::Add | Opcode::Mul => self.inst_alu += 1,
            Opcode::Cmp => self.inst_compare += 1,
            Opcode::Ldi => self.inst_load += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Prn | Opcode::Pra => self.inst_io += 1,
            Opcode::Hlt => self.inst_system += 1,
            Opcode::Jmp | Opcode::Ret => self.inst_branch += 1,
            Opcode::Call => {
                self.inst_branch += 1;
                self.calls += 1;
            }
            Opcode::Jeq | Opcode::Jne => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
        }
    }

    /// Updates the deepest stack observed.
    pub fn observe_stack_depth(&mut self, depth: u64) {
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }

    /// Renders only the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to render all sections.
    pub fn report_sections(&self, sections: &[&str]) -> String {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "LS8 SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let kips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            let _ = writeln!(out, "host_seconds             {seconds:.6} s");
            let _ = writeln!(out, "sim_cycles               {}", self.cycles);
            let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
            let _ = writeln!(out, "sim_kips                 {kips:.2}");
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.compare", self.inst_compare),
                ("op.load", self.inst_load),
                ("op.stack", self.inst_stack),
                ("op.branch", self.inst_branch),
                ("op.io", self.inst_io),
                ("op.system", self.inst_system),
            ] {
                let _ = writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count));
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("control") {
            let _ = writeln!(out, "CONTROL FLOW");
            let _ = writeln!(out, "  branch.taken           {}", self.branches_taken);
            let _ = writeln!(out, "  branch.not_taken       {}", self.branches_not_taken);
            let _ = writeln!(out, "  call.count             {}", self.calls);
            let _ = writeln!(out, "  stack.max_depth        {}", self.max_stack_depth);
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints all statistics sections to stderr.
    pub fn print(&self) {
        eprint!("{}", self.report_sections(&[]));
    }
}
