//! Shifter tests.

use lc3bsim_core::core::units::Shifter;
use lc3bsim_core::core::units::alu::shifts::ShiftMode;
use rstest::rstest;

use crate::common::fixtures::{WordBuilder, latches};

#[rstest]
#[case(ShiftMode::Lshf, 0x0001, 4, 0x0010)]
#[case(ShiftMode::Lshf, 0x8001, 1, 0x0002)]
#[case(ShiftMode::Rshfl, 0x8000, 15, 0x0001)]
#[case(ShiftMode::Rshfl, 0xFF00, 4, 0x0FF0)]
#[case(ShiftMode::Rshfa, 0xFF80, 4, 0xFFF8)]
#[case(ShiftMode::Rshfa, 0x7F00, 4, 0x07F0)]
#[case(ShiftMode::Rshfa, 0x8000, 15, 0xFFFF)]
#[case(ShiftMode::Lshf, 0x1234, 0, 0x1234)]
fn shifts(#[case] mode: ShiftMode, #[case] value: u16, #[case] amount: u16, #[case] want: u16) {
    assert_eq!(Shifter::execute(mode, value, amount), want);
}

#[rstest]
#[case(0x0000, Some(ShiftMode::Lshf))]
#[case(0x0010, Some(ShiftMode::Rshfl))]
#[case(0x0030, Some(ShiftMode::Rshfa))]
#[case(0x0020, None)]
fn decodes_mode(#[case] ir: u16, #[case] want: Option<ShiftMode>) {
    assert_eq!(ShiftMode::decode(ir), want);
}

#[test]
fn evaluates_from_ir_8_6() {
    // RSHFA R3, R2, #4
    let mut l = latches(WordBuilder::new().gate_shf().build(), 0xD6B4);
    l.regs.write(2, 0xFF80);
    assert_eq!(Shifter::evaluate(&l), Some(0xFFF8));
}

#[test]
fn reserved_mode_has_no_value() {
    // ADD R2, R2, #5 places 10 in IR[5:4]
    let l = latches(WordBuilder::new().build(), 0x14A5);
    assert_eq!(Shifter::evaluate(&l), None);
}
