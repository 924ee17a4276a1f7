//! Disassembler tests.

use crate::common::asm;
use mipsim_core::isa::decode::decode;
use mipsim_core::isa::disasm::disassemble;
use pretty_assertions::assert_eq;

/// Decodes at the text base and disassembles.
fn dis(raw: u32) -> String {
    disassemble(&decode(raw, 0x0040_0000))
}

#[test]
fn register_format_three_operand() {
    assert_eq!(dis(asm::addu(8, 9, 10)), "addu $8, $9, $10");
    assert_eq!(dis(asm::subu(1, 2, 3)), "subu $1, $2, $3");
    assert_eq!(dis(asm::and(4, 5, 6)), "and $4, $5, $6");
    assert_eq!(dis(asm::or(4, 5, 6)), "or $4, $5, $6");
    assert_eq!(dis(asm::slt(4, 5, 6)), "slt $4, $5, $6");
}

#[test]
fn shifts_render_three_operands() {
    // The machine takes the shift amount from rt, so the trace shows it.
    assert_eq!(dis(asm::sll(1, 2, 3)), "sll $1, $2, $3");
    assert_eq!(dis(asm::srl(1, 2, 3)), "srl $1, $2, $3");
}

#[test]
fn jr_renders_single_operand() {
    assert_eq!(dis(asm::jr(31)), "jr $31");
}

#[test]
fn immediate_arithmetic_is_signed_decimal() {
    assert_eq!(dis(asm::addiu(1, 0, 5)), "addiu $1, $0, 5");
    assert_eq!(dis(asm::addiu(1, 0, -1)), "addiu $1, $0, -1");
    assert_eq!(dis(asm::andi(2, 3, 0x00FF)), "andi $2, $3, 255");
}

#[test]
fn loads_and_stores_use_offset_base_form() {
    assert_eq!(dis(asm::lw(2, 29, 4)), "lw $2, 4($29)");
    assert_eq!(dis(asm::sw(2, 29, -4)), "sw $2, -4($29)");
}

#[test]
fn branches_show_absolute_targets() {
    // Offset 2 from PC 0x00400000: target 0x0040000c
    assert_eq!(dis(asm::beq(1, 2, 2)), "beq $1, $2, 0x0040000c");
    assert_eq!(dis(asm::bne(1, 2, 2)), "bne $1, $2, 0x0040000c");
}

#[test]
fn jumps_show_absolute_targets() {
    assert_eq!(dis(asm::j(0x0010_0100)), "j 0x00400400");
    assert_eq!(dis(asm::jal(0x0010_0100)), "jal 0x00400400");
}

#[test]
fn lui_is_decimal_immediate() {
    assert_eq!(dis(asm::lui(5, 0x1234)), "lui $5, 4660");
}

#[test]
fn unsupported_renders_unknown() {
    assert_eq!(dis(0xFC00_0000), "unknown");
}
