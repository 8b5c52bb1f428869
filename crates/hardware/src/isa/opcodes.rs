//! LS8 Opcodes.
//!
//! Every opcode is one byte laid out as `AABCDDDD`:
//! `AA` operand count, `B` ALU operation, `C` sets PC, `DDDD` identifier.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Print a register as a decimal number.
pub const PRN: u8 = 0b0100_0111;

/// Print a register as an ASCII character.
pub const PRA: u8 = 0b0100_1000;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Add two registers, storing into the first.
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers, storing into the first.
pub const MUL: u8 = 0b1010_0010;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;
