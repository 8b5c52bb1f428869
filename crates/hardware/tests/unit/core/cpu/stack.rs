//! # Stack Tests
//!
//! `PUSH`/`POP`/`CALL`/`RET` against the downward-growing stack in main memory.

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::common::Fault;
use ls8_core::common::constants::STACK_RESET;
use ls8_core::config::Config;
use ls8_core::isa::opcodes;
use pretty_assertions::assert_eq;

#[test]
fn test_push_pop_round_trip_restores_sp() {
    let image = ProgramBuilder::new()
        .ldi(0, 7)
        .push(0)
        .pop(1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&image);

    let _ = ctx.run().unwrap();
    assert_eq!(ctx.reg(1), 7);
    assert_eq!(ctx.sp(), STACK_RESET);
}

#[test]
fn test_push_decrements_then_writes() {
    let image = ProgramBuilder::new().ldi(0, 0xAB).push(0).hlt().build();
    let mut ctx = TestContext::new().load(&image);

    ctx.step_n(2);
    assert_eq!(ctx.sp(), 0xF3);
    assert_eq!(ctx.cpu().ram.read(0xF3), Ok(0xAB));
    assert_eq!(ctx.cpu().stack_depth(), 1);
}

#[test]
fn test_stack_is_lifo() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    for v in [1, 2, 3] {
        cpu.push(v).unwrap();
    }
    assert_eq!(cpu.pop(), Ok(3));
    assert_eq!(cpu.pop(), Ok(2));
    assert_eq!(cpu.pop(), Ok(1));
    assert_eq!(cpu.regs.sp(), STACK_RESET);
}

#[test]
fn test_pop_empty_stack_underflows() {
    let image = ProgramBuilder::new().ldi(1, 9).pop(1).hlt().build();
    let mut ctx = TestContext::new().load(&image);

    assert_eq!(ctx.run(), Err(Fault::StackUnderflow { sp: STACK_RESET }));
    assert_eq!(ctx.reg(1), 9);
    assert_eq!(ctx.sp(), STACK_RESET);
    assert_eq!(ctx.pc(), 3);
}

#[test]
fn test_push_at_zero_overflows_without_writing() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().regs.set_sp(0);
    let before = ctx.cpu().ram.clone();

    assert_eq!(ctx.cpu_mut().push(0x55), Err(Fault::StackOverflow { sp: 0 }));
    assert_eq!(ctx.sp(), 0);
    assert_eq!(ctx.cpu().ram, before);
}

#[test]
fn test_pop_into_invalid_register_leaves_stack() {
    let image = ProgramBuilder::new()
        .ldi(0, 1)
        .push(0)
        .pop(8)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&image);

    assert_eq!(ctx.run(), Err(Fault::InvalidRegister(8)));
    assert_eq!(ctx.sp(), STACK_RESET - 1);
}

#[test]
fn test_configured_stack_base() {
    let mut config = Config::default();
    config.stack.reset_sp = 0x80;
    let mut ctx = TestContext::with_config(&config);

    assert_eq!(ctx.sp(), 0x80);
    ctx.cpu_mut().push(4).unwrap();
    assert_eq!(ctx.cpu().ram.read(0x7F), Ok(4));
    assert_eq!(ctx.cpu_mut().pop(), Ok(4));
    assert_eq!(
        ctx.cpu_mut().pop(),
        Err(Fault::StackUnderflow { sp: 0x80 })
    );
}

/// `LDI R1,8; CALL R1; PRN R0; HLT; sub@8: LDI R0,42; RET`
fn call_program() -> Vec<u8> {
    ProgramBuilder::new()
        .ldi(1, 8)
        .call(1)
        .prn(0)
        .hlt()
        .ldi(0, 42)
        .ret()
        .build()
}

#[test]
fn test_call_pushes_return_address_and_jumps() {
    let mut ctx = TestContext::new().load(&call_program());

    ctx.step_n(2);
    assert_eq!(ctx.pc(), 8);
    assert_eq!(ctx.sp(), 0xF3);
    assert_eq!(ctx.cpu().ram.read(0xF3), Ok(5));
}

#[test]
fn test_ret_resumes_after_call_with_sp_restored() {
    let mut ctx = TestContext::new().load(&call_program());

    ctx.step_n(4);
    assert_eq!(ctx.pc(), 5);
    assert_eq!(ctx.sp(), STACK_RESET);

    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output(), "42\n");
    assert_eq!(ctx.cpu().stats.calls, 1);
}

#[test]
fn test_nested_calls() {
    // main: LDI R1,outer; CALL R1; PRN R0; HLT
    // outer@8: LDI R2,inner; CALL R2; PRN R0; RET
    // inner@16: LDI R0,5; RET
    let image = ProgramBuilder::new()
        .ldi(1, 8)
        .call(1)
        .prn(0)
        .hlt()
        .ldi(2, 16)
        .call(2)
        .prn(0)
        .ret()
        .ldi(0, 5)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&image);

    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output(), "5\n5\n");
    assert_eq!(ctx.sp(), STACK_RESET);
    assert_eq!(ctx.cpu().stats.max_stack_depth, 2);
}

#[test]
fn test_ret_on_empty_stack_underflows() {
    let image = ProgramBuilder::new().ret().build();
    let mut ctx = TestContext::new().load(&image);

    assert_eq!(ctx.run(), Err(Fault::StackUnderflow { sp: STACK_RESET }));
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn test_call_in_last_cells_has_unrepresentable_return() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().ram.write(254, opcodes::CALL).unwrap();
    ctx.cpu_mut().ram.write(255, 0).unwrap();
    ctx.cpu_mut().pc = 254;

    assert_eq!(ctx.run(), Err(Fault::AddressOutOfRange(256)));
    assert_eq!(ctx.sp(), STACK_RESET);
}
