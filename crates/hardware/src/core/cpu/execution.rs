//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch/Decode:** Reads the opcode at the PC and exactly the operands it needs.
//! 2. **Dispatch:** Routes each opcode to the ALU, stack, branch or I/O logic.
//! 3. **PC Update:** Falls through by the instruction size unless the handler jumped.
//! 4. **Termination:** Stops on `HLT` or on the first fault.

use super::Cpu;
use crate::common::Fault;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::{Instruction, Opcode};
use crate::soc::devices::Console;

impl<C: Console> Cpu<C> {
    /// Executes a single instruction.
    ///
    /// On a fault no architectural state has been modified by the faulting
    /// instruction; the caller decides whether to stop.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised while fetching, decoding or executing.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.stats.cycles += 1;
        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        let inst = decode(&self.ram, self.pc)?;
        let pc = self.pc;
        let taken = self.execute(inst)?;
        self.stats.record(inst.op, taken);

        tracing::trace!(pc, op = %inst.op, a = inst.a, b = inst.b, next_pc = self.pc, "retired");
        Ok(())
    }

    /// Runs until `HLT` or a fault.
    ///
    /// # Returns
    ///
    /// The number of instructions retired, including the `HLT`.
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`]; the CPU is left stopped at the faulting instruction.
    pub fn run(&mut self) -> Result<u64, Fault> {
        self.running = true;
        while self.running {
            if let Err(fault) = self.step() {
                self.running = false;
                self.console.flush();
                tracing::debug!(pc = self.pc, %fault, "execution stopped by fault");
                return Err(fault);
            }
        }
        self.console.flush();
        tracing::debug!(
            instructions = self.stats.instructions_retired,
            "halted"
        );
        Ok(self.stats.instructions_retired)
    }

    /// Executes a decoded instruction and updates the PC.
    ///
    /// # Returns
    ///
    /// `true` if a conditional jump was taken.
    fn execute(&mut self, inst: Instruction) -> Result<bool, Fault> {
        let next = self.pc + inst.size();

        let target: Option<usize> = match inst.op {
            Opcode::Ldi => {
                self.regs.set(inst.reg_a(), inst.b)?;
                None
            }
            Opcode::Prn => {
                let val = self.regs.get(inst.reg_a())?;
                self.console.write_str(&format!("{val}\n"));
                None
            }
            Opcode::Pra => {
                let val = self.regs.get(inst.reg_a())?;
                let mut buf = [0u8; 4];
                self.console.write_str(char::from(val).encode_utf8(&mut buf));
                None
            }
            Opcode::Hlt => {
                self.running = false;
                None
            }
            Opcode::Add | Opcode::Mul => {
                let a = self.regs.get(inst.reg_a())?;
                let b = self.regs.get(inst.reg_b())?;
                let op = inst
                    .op
                    .alu_op()
                    .ok_or_else(|| Fault::UnsupportedAluOperation(inst.op.to_string()))?;
                self.regs.set(inst.reg_a(), Alu::execute(op, a, b))?;
                None
            }
            Opcode::Cmp => {
                let a = self.regs.get(inst.reg_a())?;
                let b = self.regs.get(inst.reg_b())?;
                self.fl.compare(a, b);
                None
            }
            Opcode::Push => {
                let val = self.regs.get(inst.reg_a())?;
                self.push(val)?;
                None
            }
            Opcode::Pop => {
                // Validate the destination before the stack moves.
                let _ = self.regs.get(inst.reg_a())?;
                let val = self.pop()?;
                self.regs.set(inst.reg_a(), val)?;
                None
            }
            Opcode::Call => {
                let dest = self.regs.get(inst.reg_a())?;
                Some(self.call(dest, next)?)
            }
            Opcode::Ret => Some(self.ret()?),
            Opcode::Jmp => Some(usize::from(self.regs.get(inst.reg_a())?)),
            Opcode::Jeq => {
                let dest = self.regs.get(inst.reg_a())?;
                self.fl.equal().then_some(usize::from(dest))
            }
            Opcode::Jne => {
                let dest = self.regs.get(inst.reg_a())?;
                (!self.fl.equal()).then_some(usize::from(dest))
            }
        };

        let taken = matches!(inst.op, Opcode::Jeq | Opcode::Jne) && target.is_some();
        self.pc = target.unwrap_or(next);
        Ok(taken)
    }
}
