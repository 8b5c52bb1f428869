//! Instruction encoding and decoded instruction types.
//!
//! Provides bit extraction for the `AABCDDDD` opcode layout, the closed set of
//! LS8 opcodes, and the decoded instruction handed to the execution engine.

use std::fmt;

use crate::common::constants::{ALU_OP_BIT, IDENTIFIER_MASK, OPERAND_COUNT_SHIFT, SETS_PC_BIT};
use crate::core::units::alu::AluOp;
use crate::isa::opcodes;

/// Trait for extracting fields from an opcode byte.
pub trait OpcodeBits {
    /// Number of operand bytes that follow the opcode (bits 7-6).
    fn operand_count(&self) -> usize;

    /// `true` if the instruction is executed by the ALU (bit 5).
    fn is_alu(&self) -> bool;

    /// `true` if the instruction sets the PC itself (bit 4).
    fn sets_pc(&self) -> bool;

    /// Instruction identifier within its group (bits 3-0).
    fn identifier(&self) -> u8;
}

impl OpcodeBits for u8 {
    #[inline]
    fn operand_count(&self) -> usize {
        usize::from(self >> OPERAND_COUNT_SHIFT)
    }

    #[inline]
    fn is_alu(&self) -> bool {
        self & ALU_OP_BIT != 0
    }

    #[inline]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }

    #[inline]
    fn identifier(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// The LS8 instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `reg := immediate`
    Ldi,
    /// Print `reg` in decimal.
    Prn,
    /// Print `reg` as a character.
    Pra,
    /// Stop execution.
    Hlt,
    /// `a := a + b`
    Add,
    /// `a := a * b`
    Mul,
    /// Push `reg`.
    Push,
    /// Pop into `reg`.
    Pop,
    /// Push return address, jump to `reg`.
    Call,
    /// Pop return address into PC.
    Ret,
    /// Set flags from `a` vs `b`.
    Cmp,
    /// Unconditional jump to `reg`.
    Jmp,
    /// Jump to `reg` if Equal.
    Jeq,
    /// Jump to `reg` if not Equal.
    Jne,
}

impl Opcode {
    /// Every opcode, in encoding order.
    pub const ALL: [Self; 14] = [
        Self::Hlt,
        Self::Ret,
        Self::Push,
        Self::Pop,
        Self::Prn,
        Self::Pra,
        Self::Call,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Ldi,
        Self::Add,
        Self::Mul,
        Self::Cmp,
    ];

    /// The encoded opcode byte.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Ldi => opcodes::LDI,
            Self::Prn => opcodes::PRN,
            Self::Pra => opcodes::PRA,
            Self::Hlt => opcodes::HLT,
            Self::Add => opcodes::ADD,
            Self::Mul => opcodes::MUL,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
            Self::Call => opcodes::CALL,
            Self::Ret => opcodes::RET,
            Self::Cmp => opcodes::CMP,
            Self::Jmp => opcodes::JMP,
            Self::Jeq => opcodes::JEQ,
            Self::Jne => opcodes::JNE,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Pra => "PRA",
            Self::Hlt => "HLT",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }

    /// Number of operand bytes following the opcode.
    pub fn operand_count(self) -> usize {
        self.byte().operand_count()
    }

    /// Total instruction size in bytes.
    pub fn size(self) -> usize {
        1 + self.operand_count()
    }

    /// `true` if the handler writes the PC instead of falling through.
    pub fn sets_pc(self) -> bool {
        self.byte().sets_pc()
    }

    /// The ALU operation for arithmetic opcodes.
    pub const fn alu_op(self) -> Option<AluOp> {
        match self {
            Self::Add => Some(AluOp::Add),
            Self::Mul => Some(AluOp::Mul),
            _ => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Decodes an opcode byte, returning the byte itself if it is undefined.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Ok(match byte {
            opcodes::LDI => Self::Ldi,
            opcodes::PRN => Self::Prn,
            opcodes::PRA => Self::Pra,
            opcodes::HLT => Self::Hlt,
            opcodes::ADD => Self::Add,
            opcodes::MUL => Self::Mul,
            opcodes::PUSH => Self::Push,
            opcodes::POP => Self::Pop,
            opcodes::CALL => Self::Call,
            opcodes::RET => Self::Ret,
            opcodes::CMP => Self::Cmp,
            opcodes::JMP => Self::Jmp,
            opcodes::JEQ => Self::Jeq,
            opcodes::JNE => Self::Jne,
            other => return Err(other),
        })
    }
}

/// A fetched and decoded instruction.
///
/// Operands the opcode does not use are zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Decoded opcode.
    pub op: Opcode,
    /// First operand byte (register index for every opcode that has one).
    pub a: u8,
    /// Second operand byte (register index, or the immediate for `LDI`).
    pub b: u8,
}

impl Instruction {
    /// Builds an instruction from an opcode and its operands.
    pub const fn new(op: Opcode, a: u8, b: u8) -> Self {
        Self { op, a, b }
    }

    /// First operand as a register index.
    pub fn reg_a(self) -> usize {
        usize::from(self.a)
    }

    /// Second operand as a register index.
    pub fn reg_b(self) -> usize {
        usize::from(self.b)
    }

    /// Encoded size in bytes.
    pub fn size(self) -> usize {
        self.op.size()
    }
}
