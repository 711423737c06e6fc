//! # Execute Stage Tests
//!
//! Register transfers for the memory-access family and the MBR/BUS plumbing
//! around the ALU.

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;
use chipcpu_core::common::addr::Address;
use chipcpu_core::common::error::SimError;
use chipcpu_core::isa::opcodes::OP_WB;
use chipcpu_core::sim::StepEvent;
use chipcpu_core::soc::bus::ControlLines;

fn run_program(program: &[u16]) -> TestContext {
    let mut ctx = TestContext::new().load_program(program);
    let report = ctx.run();
    assert!(report.is_success(), "{:?}", report.outcome);
    ctx
}

// ═════════════════════════════════════════════════════════════════════════════
//  Memory access family
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn wb_and_wib_load_low_operand_byte() {
    let ctx = run_program(&ProgramBuilder::new().wb(0x1AB).wib(0x7FF).eop().build());
    assert_eq!(ctx.cpu().regs.mbr, 0xAB);
    assert_eq!(ctx.cpu().regs.iobr, 0xFF);
}

#[test]
fn wm_stores_mbr_at_operand() {
    let ctx = run_program(&ProgramBuilder::new().wb(0x5A).wm(0x400).eop().build());
    let cpu = ctx.cpu();
    assert_eq!(cpu.regs.mar, 0x400);
    assert_eq!(cpu.bus.memory.read_byte(Address(0x400)).unwrap(), 0x5A);
    assert_eq!(cpu.stats.memory_writes, 1);
}

#[test]
fn rm_loads_mbr_from_operand() {
    let program = ProgramBuilder::new().wb(0x66).wm(0x300).wb(0).rm(0x300).eop().build();
    let ctx = run_program(&program);
    assert_eq!(ctx.cpu().regs.mbr, 0x66);
    assert_eq!(ctx.cpu().stats.memory_reads, 1);
}

#[test]
fn wm_can_overwrite_the_program() {
    // Turn the zero word at 0x008 into EOP, then branch to it.
    let program = ProgramBuilder::new()
        .wb(0xF8)
        .wm(0x008)
        .br(0x008)
        .eop()
        .raw(0x0000)
        .build();
    let ctx = run_program(&program);
    assert_eq!(ctx.cpu().regs.pc, 0x00A);
}

#[test]
fn wio_and_rio_use_the_io_buffer() {
    let program = ProgramBuilder::new()
        .wib(0x3C)
        .wio(0x01F)
        .wib(0)
        .rio(0x01F)
        .eop()
        .build();
    let ctx = run_program(&program);
    let cpu = ctx.cpu();
    assert_eq!(cpu.regs.ioar, 0x01F);
    assert_eq!(cpu.regs.iobr, 0x3C);
    assert_eq!(cpu.bus.io.read(Address(0x1F)), 0x3C);
    assert_eq!(cpu.bus.memory.read_byte(Address(0x1F)).unwrap(), 0);
    assert_eq!((cpu.stats.io_writes, cpu.stats.io_reads), (1, 1));
}

#[test]
fn swap_exchanges_mbr_and_iobr() {
    let ctx = run_program(&ProgramBuilder::new().wb(1).wib(2).swap().eop().build());
    assert_eq!((ctx.cpu().regs.mbr, ctx.cpu().regs.iobr), (2, 1));
}

// ═════════════════════════════════════════════════════════════════════════════
//  ALU family
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn wacc_copies_mbr_through_bus() {
    let ctx = run_program(&ProgramBuilder::new().wb(0x42).wacc().eop().build());
    assert_eq!(ctx.acc(), 0x42);
}

#[test]
fn racc_latches_accumulator_into_mbr() {
    let program = ProgramBuilder::new().wb(0x21).wacc().wb(0).racc().eop().build();
    let ctx = run_program(&program);
    assert_eq!(ctx.acc(), 0x21);
    assert_eq!(ctx.cpu().regs.mbr, 0x21);
}

#[test]
fn alu_cycles_disconnect_storage() {
    let program = ProgramBuilder::new().wb(3).add().eop().build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.sim.step().unwrap();
    let rec = ctx.sim.step().unwrap();
    assert_eq!(rec.snapshot.lines, ControlLines::DISCONNECTED);
    assert_eq!(rec.snapshot.bus, 3);
    assert_eq!(rec.snapshot.acc, 3);
}

#[test]
fn mul_multiplies_accumulator_by_mbr() {
    let program = ProgramBuilder::new().wb(0x0C).wacc().wb(0x0B).mul().eop().build();
    let ctx = run_program(&program);
    assert_eq!(ctx.acc(), 132);
}

#[test]
fn word_mul_sets_zero_flag_when_accumulator_wraps_to_zero() {
    // 0x8000 * 2 overflows the 16-bit accumulator to zero.
    let mut builder = ProgramBuilder::new().wb(0x80).wacc();
    for _ in 0..8 {
        builder = builder.shl();
    }
    let program = builder.wb(0x02).mul().eop().build();
    let mut ctx = TestContext::word_width().load_program(&program);
    assert!(ctx.run().is_success());
    assert_eq!(ctx.acc(), 0x0000);
    assert!(ctx.flags().zf);
    assert!(!ctx.flags().sf);
    assert!(ctx.flags().of);
}

#[test]
fn logic_and_shift_sequence() {
    let program = ProgramBuilder::new()
        .wb(0xF0)
        .wacc()
        .wb(0x3C)
        .and()
        .wb(0x01)
        .or()
        .xor()
        .not()
        .shl()
        .shr()
        .eop()
        .build();
    let ctx = run_program(&program);
    // 0xF0 & 0x3C = 0x30; | 1 = 0x31; ^ 1 = 0x30; !0x30 = 0xCF; << 1 = 0x9E; >> 1 = 0x4F
    assert_eq!(ctx.acc(), 0x4F);
    assert!(!ctx.flags().cf);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Unknown opcodes
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn permissive_decode_treats_unknown_opcode_as_nop() {
    let program = ProgramBuilder::new().wb(4).raw(0x4000).wacc().eop().build();
    let mut ctx = TestContext::new().load_program(&program);
    let report = ctx.run();

    assert!(report.is_success());
    assert_eq!(ctx.acc(), 4);
    assert_eq!(ctx.cpu().stats.unknown_opcodes, 1);
    let events: Vec<StepEvent> = ctx.records().iter().map(|r| r.event).collect();
    assert_eq!(
        events,
        vec![
            StepEvent::Executed,
            StepEvent::UnknownOpcode,
            StepEvent::Executed,
            StepEvent::Halted
        ]
    );
}

#[test]
fn strict_decode_rejects_unknown_opcode() {
    let program = ProgramBuilder::new().wb(4).raw(0x6000).eop().build();
    let mut ctx = TestContext::strict().load_program(&program);
    let _ = ctx.sim.step().unwrap();
    let err = ctx.sim.step().unwrap_err();
    assert!(matches!(
        err,
        SimError::IllegalInstruction { opcode: 0x0C, pc: 0x002 }
    ));
}

#[test]
fn unknown_opcode_leaves_control_register_alone() {
    let program = ProgramBuilder::new().wb(4).raw(0x4000).eop().build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.sim.step().unwrap();
    let control = ctx.cpu().regs.control;
    assert_eq!(control, OP_WB);

    let rec = ctx.sim.step().unwrap();
    assert_eq!(rec.event, StepEvent::UnknownOpcode);
    assert_eq!(ctx.cpu().regs.control, control);
    assert_eq!(ctx.cpu().regs.pc, 0x004);
}
