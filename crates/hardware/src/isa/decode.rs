//! LS8 Instruction Decoder.
//!
//! This module fetches an opcode byte from memory, decodes it, and then fetches
//! exactly as many operand bytes as the opcode's `AA` field requests. An
//! instruction ending at the top of memory therefore never reads past it.

use crate::common::Fault;
use crate::isa::instruction::{Instruction, Opcode};
use crate::soc::Memory;

/// Decodes the instruction at `pc`.
///
/// # Arguments
///
/// * `mem` - Memory to fetch from.
/// * `pc` - Address of the opcode byte.
///
/// # Errors
///
/// * [`Fault::AddressOutOfRange`] if the opcode or a required operand lies outside memory.
/// * [`Fault::UnknownInstruction`] if the opcode byte is undefined.
pub fn decode(mem: &Memory, pc: usize) -> Result<Instruction, Fault> {
    let byte = mem.read(pc)?;
    let op = Opcode::try_from(byte).map_err(|opcode| Fault::UnknownInstruction { opcode, pc })?;

    let mut operands = [0u8; 2];
    for (i, operand) in operands.iter_mut().take(op.operand_count()).enumerate() {
        *operand = mem.read(pc + 1 + i)?;
    }

    Ok(Instruction::new(op, operands[0], operands[1]))
}
