//! Writeback-stage tests.

use crate::common::asm;
use crate::common::harness::TestContext;
use mipsim_core::common::constants::TEXT_BASE;
use mipsim_core::core::stages::write_back;
use mipsim_core::isa::decode::decode;

/// Runs the writeback stage for `raw` with `value`, decoded at `pc`.
fn wb(tc: &mut TestContext, raw: u32, value: u32, pc: u32) -> Option<usize> {
    let inst = decode(raw, pc);
    write_back(&inst, value, &mut tc.machine)
}

#[test]
fn register_format_writes_rd() {
    let mut tc = TestContext::new();
    let changed = wb(&mut tc, asm::addu(8, 9, 10), 42, TEXT_BASE);
    assert_eq!(changed, Some(8));
    assert_eq!(tc.get_reg(8), 42);
}

#[test]
fn all_register_alu_ops_write_rd() {
    for raw in [
        asm::addu(3, 1, 2),
        asm::and(3, 1, 2),
        asm::or(3, 1, 2),
        asm::slt(3, 1, 2),
        asm::sll(3, 1, 2),
        asm::srl(3, 1, 2),
        asm::subu(3, 1, 2),
    ] {
        let mut tc = TestContext::new();
        let changed = wb(&mut tc, raw, 7, TEXT_BASE);
        assert_eq!(changed, Some(3), "raw {raw:#010x}");
        assert_eq!(tc.get_reg(3), 7);
    }
}

#[test]
fn jr_writes_nothing() {
    let mut tc = TestContext::new();
    let before = tc.reg_snapshot();
    let changed = wb(&mut tc, asm::jr(31), 0x0040_0100, TEXT_BASE);
    assert_eq!(changed, None);
    assert_eq!(tc.reg_snapshot(), before);
}

#[test]
fn immediate_result_ops_write_rt() {
    for raw in [
        asm::addiu(5, 1, 3),
        asm::andi(5, 1, 3),
        asm::lui(5, 3),
        asm::lw(5, 1, 0),
        asm::ori(5, 1, 3),
    ] {
        let mut tc = TestContext::new();
        let changed = wb(&mut tc, raw, 99, TEXT_BASE);
        assert_eq!(changed, Some(5), "raw {raw:#010x}");
        assert_eq!(tc.get_reg(5), 99);
    }
}

#[test]
fn branches_and_stores_write_nothing() {
    for raw in [asm::beq(1, 2, 2), asm::bne(1, 2, 2), asm::sw(2, 29, 0)] {
        let mut tc = TestContext::new();
        let before = tc.reg_snapshot();
        let changed = wb(&mut tc, raw, 0, TEXT_BASE);
        assert_eq!(changed, None, "raw {raw:#010x}");
        assert_eq!(tc.reg_snapshot(), before);
    }
}

#[test]
fn plain_jump_writes_nothing() {
    let mut tc = TestContext::new();
    let before = tc.reg_snapshot();
    let changed = wb(&mut tc, asm::j(0x0010_0100), 0x0040_0400, TEXT_BASE);
    assert_eq!(changed, None);
    assert_eq!(tc.reg_snapshot(), before);
}

#[test]
fn jal_writes_pc_plus_four_to_the_link_register() {
    let mut tc = TestContext::new();
    let pc = 0x0040_0020;
    let changed = wb(&mut tc, asm::jal(0x0010_0100), 0x0040_0400, pc);
    assert_eq!(changed, Some(31));
    assert_eq!(tc.get_reg(31), pc + 4, "single write of the return address");
}

#[test]
fn unsupported_writes_nothing() {
    let mut tc = TestContext::new();
    let before = tc.reg_snapshot();
    let changed = wb(&mut tc, 0xFC00_0000, 0, TEXT_BASE);
    assert_eq!(changed, None);
    assert_eq!(tc.reg_snapshot(), before);
}

#[test]
fn register_zero_is_not_hardwired() {
    // The reference machine lets writes to $0 land; so does this one.
    let mut tc = TestContext::new();
    let changed = wb(&mut tc, asm::addiu(0, 1, 7), 7, TEXT_BASE);
    assert_eq!(changed, Some(0));
    assert_eq!(tc.get_reg(0), 7);
}
