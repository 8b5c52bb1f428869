//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the register-to-register arithmetic of the LS8.
//! All results are truncated to 8 bits: the datapath is a byte wide and
//! overflow wraps rather than growing past 255.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul

/// Integer arithmetic operations (add, multiply).
pub mod arithmetic;

use std::fmt;
use std::str::FromStr;

use crate::common::Fault;

/// ALU operations implemented by the LS8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `dest = dest + src`, wrapping.
    Add,
    /// `dest = dest * src`, wrapping.
    Mul,
}

impl AluOp {
    /// Assembly mnemonic of the operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for AluOp {
    type Err = Fault;

    /// Parses an operation name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnsupportedAluOperation`] for any name other than `ADD` or `MUL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADD" => Ok(Self::Add),
            "MUL" => Ok(Self::Mul),
            _ => Err(Fault::UnsupportedAluOperation(s.to_string())),
        }
    }
}

/// Arithmetic Logic Unit for register operations.
///
/// The ALU is stateless: it computes a result from two operands and the
/// engine writes it back to the destination register.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - Destination register's current value
    /// * `b`  - Source register's value
    ///
    /// # Returns
    ///
    /// The 8-bit result to store into the destination register.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 9, 5), 45);
    ///
    /// // 200 + 100 = 300, which wraps to 44
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100), 44);
    /// ```
    pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        arithmetic::execute(op, a, b)
    }

    /// Executes an ALU operation given by name.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnsupportedAluOperation`] if `name` is not an implemented operation.
    pub fn apply(name: &str, a: u8, b: u8) -> Result<u8, Fault> {
        let op = name.parse::<AluOp>()?;
        Ok(Self::execute(op, a, b))
    }
}
