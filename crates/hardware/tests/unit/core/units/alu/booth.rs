//! # Booth Multiplication Tests
//!
//! Booth's algorithm must agree with signed multiplication for every operand
//! pair, including the most negative value where a naive logical shift
//! corrupts the product.

use chipcpu_core::config::AluWidth;
use chipcpu_core::core::units::alu::arithmetic::{booth_multiply, booth_multiply_steps, mul};
use proptest::prelude::*;
use rstest::rstest;

/// Expected 16-bit product of two signed bytes.
fn signed_product8(m: i8, q: i8) -> u32 {
    u32::from((i16::from(m) * i16::from(q)) as u16)
}

#[rstest]
fn byte_sample_matches_signed_product(
    #[values(0i8, 1, -1, 127, -128)] m: i8,
    #[values(0i8, 1, -1, 127, -128)] q: i8,
) {
    let product = booth_multiply(u32::from(m as u8), u32::from(q as u8), AluWidth::Byte);
    assert_eq!(product, signed_product8(m, q), "{m} * {q}");
}

#[rstest]
#[case(7, 3, 21)]
#[case(0xFF, 0x03, 0xFFFD)]
#[case(0x80, 0x01, 0xFF80)]
#[case(0x80, 0x80, 0x4000)]
#[case(0x7F, 0x7F, 0x3F01)]
fn byte_known_products(#[case] m: u32, #[case] q: u32, #[case] expected: u32) {
    assert_eq!(booth_multiply(m, q, AluWidth::Byte), expected);
}

#[rstest]
#[case(0x7FFF, 0x7FFF, 0x3FFF_0001)]
#[case(0x8000, 0x8000, 0x4000_0000)]
#[case(0xFFFF, 0x0003, 0xFFFF_FFFD)]
#[case(0x8000, 0x0001, 0xFFFF_8000)]
fn word_known_products(#[case] m: u32, #[case] q: u32, #[case] expected: u32) {
    assert_eq!(booth_multiply(m, q, AluWidth::Word), expected);
}

#[test]
fn step_trace_has_one_entry_per_iteration_plus_final() {
    let (product, steps) = booth_multiply_steps(0x07, 0x03, AluWidth::Byte);
    assert_eq!(product, 21);
    assert_eq!(steps.len(), 9);

    let first = steps[0];
    assert_eq!((first.cycle, first.a, first.q, first.q_1, first.m), (0, 0, 3, 0, 7));

    let last = steps[8];
    assert_eq!(last.cycle, 8);
    assert_eq!((last.a << 8) | last.q, product);
}

#[test]
fn mul_flags_report_wide_products() {
    let (p, f) = mul(0x10, 0x10, AluWidth::Byte);
    assert_eq!(p, 0x0100);
    assert!(f.cf && f.of && !f.zf && !f.sf);

    let (p, f) = mul(0x03, 0xFF, AluWidth::Byte);
    assert_eq!(p, 0xFFFD);
    assert!(!f.cf && !f.of && f.sf);

    let (p, f) = mul(0x00, 0x80, AluWidth::Byte);
    assert_eq!(p, 0);
    assert!(f.zf && !f.sf);
}

proptest! {
    #[test]
    fn byte_booth_matches_signed_product(m in any::<i8>(), q in any::<i8>()) {
        let product = booth_multiply(u32::from(m as u8), u32::from(q as u8), AluWidth::Byte);
        prop_assert_eq!(product, signed_product8(m, q));
    }

    #[test]
    fn word_booth_matches_signed_product(m in any::<i16>(), q in any::<i16>()) {
        let product = booth_multiply(u32::from(m as u16), u32::from(q as u16), AluWidth::Word);
        prop_assert_eq!(product, (i32::from(m) * i32::from(q)) as u32);
    }
}
