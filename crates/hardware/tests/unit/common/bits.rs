//! Bit-field helper tests.

use lc3bsim_core::common::bits::{bit, bits, sext};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0xF025, 15, 12, 0xF)]
#[case(0xF025, 7, 0, 0x25)]
#[case(0x1283, 11, 9, 1)]
#[case(0x1283, 8, 6, 2)]
#[case(0xABCD, 15, 0, 0xABCD)]
fn extracts_fields(#[case] value: u16, #[case] hi: u32, #[case] lo: u32, #[case] want: u16) {
    assert_eq!(bits(value, hi, lo), want);
}

#[rstest]
#[case(0b1_1111, 5, 0xFFFF)]
#[case(0b0_1111, 5, 0x000F)]
#[case(0x100, 9, 0xFF00)]
#[case(0x0FF, 9, 0x00FF)]
#[case(0x400, 11, 0xFC00)]
#[case(0x80, 8, 0xFF80)]
fn sign_extends(#[case] value: u16, #[case] width: u32, #[case] want: u16) {
    assert_eq!(sext(value, width), want);
}

#[test]
fn single_bits() {
    assert!(bit(0x0800, 11));
    assert!(!bit(0x0800, 10));
    assert!(bit(0x8000, 15));
}

proptest! {
    #[test]
    fn sext_preserves_low_bits(value in any::<u16>(), width in 1u32..16) {
        let mask = (1u16 << width) - 1;
        prop_assert_eq!(sext(value & mask, width) & mask, value & mask);
    }
}
