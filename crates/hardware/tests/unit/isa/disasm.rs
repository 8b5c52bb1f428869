//! # Disassembler Tests

use ls8_core::isa::disasm::{disassemble, disassemble_at, disassemble_instruction};
use ls8_core::isa::{Instruction, Opcode};
use ls8_core::soc::Memory;
use rstest::rstest;

#[rstest]
#[case(&[0x82, 0, 8], "LDI R0, 8")]
#[case(&[0xA0, 0, 1], "ADD R0, R1")]
#[case(&[0xA2, 2, 3], "MUL R2, R3")]
#[case(&[0xA7, 0, 1], "CMP R0, R1")]
#[case(&[0x47, 0], "PRN R0")]
#[case(&[0x48, 5], "PRA R5")]
#[case(&[0x45, 1], "PUSH R1")]
#[case(&[0x46, 1], "POP R1")]
#[case(&[0x50, 1], "CALL R1")]
#[case(&[0x54, 2], "JMP R2")]
#[case(&[0x55, 2], "JEQ R2")]
#[case(&[0x56, 2], "JNE R2")]
#[case(&[0x11], "RET")]
#[case(&[0x01], "HLT")]
#[case(&[0xFF], "unknown (0xff)")]
#[case(&[], "<empty>")]
#[case(&[0x82, 0], "LDI R0, ?")]
#[case(&[0xA0], "ADD R?, R?")]
fn test_disassemble(#[case] bytes: &[u8], #[case] expected: &str) {
    assert_eq!(disassemble(bytes), expected);
}

#[test]
fn test_disassemble_instruction_uses_only_its_operands() {
    let inst = Instruction::new(Opcode::Prn, 4, 99);
    assert_eq!(disassemble_instruction(inst), "PRN R4");
}

#[test]
fn test_disassemble_at_end_of_memory() {
    let mut mem = Memory::new();
    mem.write(255, 0x82).unwrap();
    assert_eq!(disassemble_at(&mem, 255), "LDI R?, ?");
    assert_eq!(disassemble_at(&mem, 256), "<empty>");
}
