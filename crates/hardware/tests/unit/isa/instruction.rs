//! # Instruction Word Tests
//!
//! Verifies the fixed opcode table and the 5-bit opcode / 11-bit operand split.

use chipcpu_core::isa::opcodes::*;
use chipcpu_core::isa::{Family, Instruction, Opcode};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(Opcode::Wm, OP_WM, 0x01)]
#[case(Opcode::Rm, OP_RM, 0x02)]
#[case(Opcode::Br, OP_BR, 0x03)]
#[case(Opcode::Rio, OP_RIO, 0x04)]
#[case(Opcode::Wio, OP_WIO, 0x05)]
#[case(Opcode::Wb, OP_WB, 0x06)]
#[case(Opcode::Wib, OP_WIB, 0x07)]
#[case(Opcode::Wacc, OP_WACC, 0x09)]
#[case(Opcode::Racc, OP_RACC, 0x0B)]
#[case(Opcode::Swap, OP_SWAP, 0x0E)]
#[case(Opcode::Brlt, OP_BRLT, 0x11)]
#[case(Opcode::Brgt, OP_BRGT, 0x12)]
#[case(Opcode::Brne, OP_BRNE, 0x13)]
#[case(Opcode::Bre, OP_BRE, 0x14)]
#[case(Opcode::Shr, OP_SHR, 0x15)]
#[case(Opcode::Shl, OP_SHL, 0x16)]
#[case(Opcode::Xor, OP_XOR, 0x17)]
#[case(Opcode::Not, OP_NOT, 0x18)]
#[case(Opcode::Or, OP_OR, 0x19)]
#[case(Opcode::And, OP_AND, 0x1A)]
#[case(Opcode::Mul, OP_MUL, 0x1B)]
#[case(Opcode::Sub, OP_SUB, 0x1D)]
#[case(Opcode::Add, OP_ADD, 0x1E)]
#[case(Opcode::Eop, OP_EOP, 0x1F)]
fn opcode_table_is_fixed(#[case] opcode: Opcode, #[case] constant: u8, #[case] code: u8) {
    assert_eq!(constant, code);
    assert_eq!(opcode.code(), code);
    assert_eq!(Opcode::from_code(code), Some(opcode));
}

#[test]
fn table_has_24_distinct_codes() {
    let mut codes: Vec<u8> = Opcode::ALL.iter().map(|op| op.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 24);
}

#[rstest]
#[case(0x00)]
#[case(0x08)]
#[case(0x0A)]
#[case(0x0C)]
#[case(0x0D)]
#[case(0x0F)]
#[case(0x10)]
#[case(0x1C)]
fn unassigned_codes_do_not_decode(#[case] code: u8) {
    assert_eq!(Opcode::from_code(code), None);
    assert_eq!(Instruction::from_parts(code, 0).opcode(), None);
}

#[test]
fn families_route_to_the_right_unit() {
    assert_eq!(Opcode::Wm.family(), Family::MemoryAccess);
    assert_eq!(Opcode::Swap.family(), Family::MemoryAccess);
    assert_eq!(Opcode::Wacc.family(), Family::Alu);
    assert_eq!(Opcode::Racc.family(), Family::Alu);
    assert_eq!(Opcode::Mul.family(), Family::Alu);
    assert_eq!(Opcode::Br.family(), Family::ControlFlow);
    assert_eq!(Opcode::Bre.family(), Family::ControlFlow);
    assert_eq!(Opcode::Eop.family(), Family::Termination);
}

#[test]
fn mnemonic_lookup_ignores_case() {
    assert_eq!(Opcode::from_mnemonic("wb"), Some(Opcode::Wb));
    assert_eq!(Opcode::from_mnemonic("BrNe"), Some(Opcode::Brne));
    assert_eq!(Opcode::from_mnemonic("NOP"), None);
    assert_eq!(Opcode::Racc.to_string(), "RACC");
}

#[test]
fn encode_places_opcode_in_top_five_bits() {
    let inst = Instruction::encode(Opcode::Wb, 0x005);
    assert_eq!(inst.0, 0x3005);
    assert_eq!(inst.to_bytes(), [0x30, 0x05]);
    assert_eq!(Instruction::from_bytes(0x30, 0x05), inst);
}

#[test]
fn operand_is_truncated_to_eleven_bits() {
    let inst = Instruction::encode(Opcode::Br, 0xFFFF);
    assert_eq!(inst.operand(), 0x7FF);
    assert_eq!(inst.opcode(), Some(Opcode::Br));
}

proptest! {
    #[test]
    fn fields_partition_the_word(word in any::<u16>()) {
        let inst = Instruction::from(word);
        let rebuilt = (u16::from(inst.opcode_bits()) << 11) | inst.operand();
        prop_assert_eq!(rebuilt, word);
        prop_assert!(inst.opcode_bits() < 32);
        prop_assert!(inst.operand() <= 0x7FF);
    }
}
