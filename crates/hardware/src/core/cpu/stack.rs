//! Stack Discipline.
//!
//! The stack lives in main memory and grows downward from `stack_base`
//! (`0xF4` after reset). `SP` (`R7`) always points at the most recently pushed byte:
//! 1. **Push:** decrement `SP`, then store at `Memory[SP]`.
//! 2. **Pop:** load `Memory[SP]`, then increment `SP`.
//! 3. **Call/Return:** push the return address and jump; pop it back into the PC.
//!
//! Both directions are bounds-checked. A push with `SP == 0` overflows and a
//! pop with `SP >= stack_base` underflows; neither modifies any state.

use super::Cpu;
use crate::common::Fault;
use crate::soc::devices::Console;

impl<C: Console> Cpu<C> {
    /// Pushes `val` onto the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::StackOverflow`] if `SP` is already 0.
    pub fn push(&mut self, val: u8) -> Result<(), Fault> {
        let sp = self.regs.sp();
        let new_sp = sp.checked_sub(1).ok_or(Fault::StackOverflow { sp })?;
        self.ram.write(usize::from(new_sp), val)?;
        self.regs.set_sp(new_sp);
        self.stats.observe_stack_depth(self.stack_depth());
        Ok(())
    }

    /// Pops the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::StackUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        if sp >= self.stack_base {
            return Err(Fault::StackUnderflow { sp });
        }
        let val = self.ram.read(usize::from(sp))?;
        self.regs.set_sp(sp + 1);
        Ok(val)
    }

    /// Pushes `return_addr` and returns `dest` as the new PC.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::AddressOutOfRange`] if `return_addr` does not fit in a
    /// byte (a `CALL` in the last two cells), or [`Fault::StackOverflow`].
    pub fn call(&mut self, dest: u8, return_addr: usize) -> Result<usize, Fault> {
        let ret = u8::try_from(return_addr).map_err(|_| Fault::AddressOutOfRange(return_addr))?;
        self.push(ret)?;
        Ok(usize::from(dest))
    }

    /// Pops the return address pushed by the matching `CALL`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::StackUnderflow`] if the stack is empty.
    pub fn ret(&mut self) -> Result<usize, Fault> {
        self.pop().map(usize::from)
    }

    /// Number of bytes currently on the stack.
    pub fn stack_depth(&self) -> u64 {
        u64::from(self.stack_base.saturating_sub(self.regs.sp()))
    }
}
