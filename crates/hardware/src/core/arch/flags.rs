//! Flags Register.
//!
//! The LS8 flags register `FL` is laid out as `00000LGE`. Only `CMP` writes it,
//! and every compare leaves exactly one of the three bits set: a result never
//! carries over into the next compare.

use std::cmp::Ordering;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};

/// Comparison outcome register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    bits: u8,
}

impl Flags {
    /// Creates a flags register with every bit clear.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Compares `a` against `b`, clearing all flags before setting the winner.
    pub fn compare(&mut self, a: u8, b: u8) {
        self.bits = match a.cmp(&b) {
            Ordering::Greater => FLAG_GREATER,
            Ordering::Less => FLAG_LESS,
            Ordering::Equal => FLAG_EQUAL,
        };
    }

    /// `true` if the last compare found `a > b`.
    pub const fn greater(self) -> bool {
        self.bits & FLAG_GREATER != 0
    }

    /// `true` if the last compare found `a < b`.
    pub const fn less(self) -> bool {
        self.bits & FLAG_LESS != 0
    }

    /// `true` if the last compare found `a == b`.
    pub const fn equal(self) -> bool {
        self.bits & FLAG_EQUAL != 0
    }

    /// Raw `00000LGE` register value.
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Clears every flag.
    pub const fn clear(&mut self) {
        self.bits = 0;
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
