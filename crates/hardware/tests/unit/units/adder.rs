//! Address adder tests.

use lc3bsim_core::core::control::signals::{Addr1Mux, Addr2Mux};
use lc3bsim_core::core::units::AddressAdder;
use rstest::rstest;

use crate::common::fixtures::{WordBuilder, latches};

#[rstest]
#[case(0x0FFF, Addr2Mux::Zero, true, 0x0000)]
#[case(0x003F, Addr2Mux::Offset6, false, 0xFFFF)]
#[case(0x001F, Addr2Mux::Offset6, true, 0x003E)]
#[case(0x01FF, Addr2Mux::PcOffset9, true, 0xFFFE)]
#[case(0x0003, Addr2Mux::PcOffset9, true, 0x0006)]
#[case(0x0400, Addr2Mux::PcOffset11, false, 0xFC00)]
#[case(0x0002, Addr2Mux::PcOffset11, true, 0x0004)]
fn selects_offset(
    #[case] ir: u16,
    #[case] select: Addr2Mux,
    #[case] lshf1: bool,
    #[case] want: u16,
) {
    assert_eq!(AddressAdder::offset(ir, select, lshf1), want);
}

#[test]
fn pc_relative() {
    let mut word = WordBuilder::new().build();
    word.addr1mux = Addr1Mux::Pc;
    word.addr2mux = Addr2Mux::PcOffset9;
    word.lshf1 = true;
    // LEA R2, #3
    let mut l = latches(word, 0xE403);
    l.pc = 0x300E;
    assert_eq!(AddressAdder::evaluate(&l), 0x3014);
}

#[test]
fn base_plus_offset_wraps() {
    let mut word = WordBuilder::new().build();
    word.addr1mux = Addr1Mux::BaseR;
    word.addr2mux = Addr2Mux::Offset6;
    // LDB R2, R1, #1
    let mut l = latches(word, 0x2441);
    l.regs.write(1, 0xFFFF);
    assert_eq!(AddressAdder::evaluate(&l), 0x0000);
}
