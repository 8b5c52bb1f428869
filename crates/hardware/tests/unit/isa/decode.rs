//! # Decoder Tests

use ls8_core::common::Fault;
use ls8_core::isa::decode::decode;
use ls8_core::isa::{Instruction, Opcode};
use ls8_core::soc::Memory;

fn memory_with(image: &[u8]) -> Memory {
    let mut mem = Memory::new();
    mem.load(image).unwrap();
    mem
}

#[test]
fn test_decode_two_operand_instruction() {
    let mem = memory_with(&[0x82, 0x03, 0x2A]);
    assert_eq!(decode(&mem, 0), Ok(Instruction::new(Opcode::Ldi, 3, 42)));
}

#[test]
fn test_decode_ignores_bytes_past_operand_count() {
    let mem = memory_with(&[0x47, 0x01, 0xFF]);
    assert_eq!(decode(&mem, 0), Ok(Instruction::new(Opcode::Prn, 1, 0)));

    let mem = memory_with(&[0x01, 0xAA, 0xBB]);
    assert_eq!(decode(&mem, 0), Ok(Instruction::new(Opcode::Hlt, 0, 0)));
}

#[test]
fn test_decode_unknown_reports_byte_and_address() {
    let mem = memory_with(&[0x01, 0x01, 0x03]);
    assert_eq!(
        decode(&mem, 2),
        Err(Fault::UnknownInstruction { opcode: 3, pc: 2 })
    );
}

#[test]
fn test_decode_pc_outside_memory() {
    let mem = Memory::new();
    assert_eq!(decode(&mem, 256), Err(Fault::AddressOutOfRange(256)));
}

#[test]
fn test_decode_single_operand_at_top_of_memory() {
    let mut mem = Memory::new();
    mem.write(254, 0x45).unwrap();
    mem.write(255, 0x02).unwrap();
    assert_eq!(decode(&mem, 254), Ok(Instruction::new(Opcode::Push, 2, 0)));
}
