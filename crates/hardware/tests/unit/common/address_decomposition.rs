//! # Address Decomposition Tests
//!
//! Verifies the split of an 11-bit address into bank, row, and column, and
//! that every address beyond the chip memory is rejected instead of aliased.

use chipcpu_core::common::addr::{Address, ChipLocation};
use chipcpu_core::common::constants::{MAX_ADDRESS, MEMORY_SIZE};
use chipcpu_core::common::error::SimError;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0x000, 0, 0, 0)]
#[case(0x01F, 0, 0, 31)]
#[case(0x020, 0, 1, 0)]
#[case(0x3FF, 0, 31, 31)]
#[case(0x400, 1, 0, 0)]
#[case(0x5A5, 1, 13, 5)]
#[case(0x7FF, 1, 31, 31)]
fn decompose_known_addresses(
    #[case] addr: u16,
    #[case] bank: usize,
    #[case] row: usize,
    #[case] column: usize,
) {
    let loc = ChipLocation::decompose(Address(addr)).unwrap();
    assert_eq!(loc, ChipLocation { bank, row, column });
}

#[test]
fn last_address_is_in_range() {
    assert_eq!(MAX_ADDRESS, 0x7FF);
    assert_eq!(MEMORY_SIZE, 2048);
    assert!(Address(MAX_ADDRESS).in_range());
    assert!(!Address(MAX_ADDRESS + 1).in_range());
}

#[rstest]
#[case(0x800)]
#[case(0xFFF)]
#[case(0xFFFF)]
fn out_of_range_addresses_are_rejected(#[case] addr: u16) {
    let err = ChipLocation::decompose(Address(addr)).unwrap_err();
    assert!(matches!(err, SimError::AddressOutOfRange { address } if address == addr));
}

#[test]
fn address_display_is_three_hex_digits() {
    assert_eq!(Address(0x2A).to_string(), "0x02a");
    assert_eq!(Address::new(0x7FF).to_string(), "0x7ff");
}

#[test]
fn address_from_raw_value() {
    assert_eq!(Address::from(0x7FF), Address::new(0x7FF));
    assert_eq!(Address::from(0x123).val(), 0x123);
}

proptest! {
    #[test]
    fn compose_inverts_decompose(addr in 0u16..=MAX_ADDRESS) {
        let loc = ChipLocation::decompose(Address(addr)).unwrap();
        prop_assert!(loc.bank < 2);
        prop_assert!(loc.row < 32);
        prop_assert!(loc.column < 32);
        prop_assert_eq!(loc.compose(), Address(addr));
    }
}
