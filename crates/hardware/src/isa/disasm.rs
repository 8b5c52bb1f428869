//! Instruction Disassembler for the LS8.
//!
//! Converts raw instruction bytes into a human-readable mnemonic string for
//! trace output and fault diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8]), "LDI R0, 8");
//! assert_eq!(disassemble(&[0b0000_0001]), "HLT");
//! ```

use crate::isa::instruction::{Instruction, Opcode};
use crate::soc::Memory;

/// Disassembles the instruction starting at `bytes[0]`.
///
/// Missing operand bytes are rendered as `?`. Undefined opcodes produce
/// `"unknown (0xNN)"`.
///
/// # Arguments
///
/// * `bytes` - Opcode byte followed by up to two operand bytes.
pub fn disassemble(bytes: &[u8]) -> String {
    let Some(&byte) = bytes.first() else {
        return "<empty>".to_string();
    };
    let Ok(op) = Opcode::try_from(byte) else {
        return format!("unknown ({byte:#04x})");
    };

    let operand = |i: usize| bytes.get(i).copied();
    let reg = |i: usize| operand(i).map_or_else(|| "R?".to_string(), |r| format!("R{r}"));

    match op {
        Opcode::Hlt | Opcode::Ret => op.mnemonic().to_string(),
        Opcode::Ldi => {
            let imm = operand(2).map_or_else(|| "?".to_string(), |v| v.to_string());
            format!("{op} {}, {imm}", reg(1))
        }
        Opcode::Add | Opcode::Mul | Opcode::Cmp => format!("{op} {}, {}", reg(1), reg(2)),
        Opcode::Prn
        | Opcode::Pra
        | Opcode::Push
        | Opcode::Pop
        | Opcode::Call
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne => format!("{op} {}", reg(1)),
    }
}

/// Disassembles a decoded instruction.
pub fn disassemble_instruction(inst: Instruction) -> String {
    let bytes = [inst.op.byte(), inst.a, inst.b];
    disassemble(&bytes[..inst.size()])
}

/// Disassembles the instruction at `pc` in `mem` without faulting.
pub fn disassemble_at(mem: &Memory, pc: usize) -> String {
    let bytes: Vec<u8> = (pc..pc + 3).map_while(|addr| mem.peek(addr)).collect();
    disassemble(&bytes)
}
