//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Address space size and the highest valid address.
//! 2. **Register Constants:** Register count and the stack pointer alias.
//! 3. **Instruction Constants:** Bit fields of the `AABCDDDD` opcode encoding.
//! 4. **Flag Constants:** Bit positions of the `00000LGE` flags register.

/// Number of addressable memory cells (8-bit address space).
pub const MEMORY_SIZE: usize = 256;

/// Highest valid memory address.
pub const MAX_ADDRESS: usize = MEMORY_SIZE - 1;

/// Number of general-purpose registers (R0-R7).
pub const REGISTER_COUNT: usize = 8;

/// Register index reserved for the stack pointer by convention.
pub const SP: usize = 7;

/// Stack pointer value after reset; the stack grows downward from here.
pub const STACK_RESET: u8 = 0xF4;

/// Shift of the operand count field (`AA`) in an opcode byte.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit marking an opcode as an ALU operation (`B`).
pub const ALU_OP_BIT: u8 = 0b0010_0000;

/// Bit marking an opcode that sets the PC itself (`C`).
pub const SETS_PC_BIT: u8 = 0b0001_0000;

/// Mask for the instruction identifier field (`DDDD`).
pub const IDENTIFIER_MASK: u8 = 0b0000_1111;

/// Flags register: Less-than bit.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Flags register: Greater-than bit.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Flags register: Equal bit.
pub const FLAG_EQUAL: u8 = 0b0000_0001;
