//! Register and memory dump format tests.

use lc3bsim_core::sim::dump::{mdump, rdump};
use pretty_assertions::assert_eq;

use crate::common::harness::TestContext;

#[test]
fn rdump_format() {
    let mut ctx = TestContext::new().load_words(0x3000, &[0x1025, 0xF025]);
    assert!(ctx.sim.run(9).is_ok());

    let mut out = Vec::new();
    rdump(&ctx.sim, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let expected = "\nCurrent register/bus values :\n\
                    -------------------------------------\n\
                    Cycle Count  : 9\n\
                    PC           : 0x3002\n\
                    IR           : 0x1025\n\
                    STATE_NUMBER : 0x0012\n\
                    \n\
                    BUS          : 0x0005\n\
                    MDR          : 0x1025\n\
                    MAR          : 0x3000\n\
                    CCs: N = 0  Z = 0  P = 1\n\
                    Registers:\n\
                    0: 0x0005\n\
                    1: 0x0000\n\
                    2: 0x0000\n\
                    3: 0x0000\n\
                    4: 0x0000\n\
                    5: 0x0000\n\
                    6: 0x0000\n\
                    7: 0x0000\n\
                    \n";
    assert_eq!(text, expected);
}

#[test]
fn mdump_format() {
    let ctx = TestContext::new().load_words(0x3000, &[0x1025, 0xF025]);
    let mut out = Vec::new();
    mdump(&ctx.sim, 0x3000, 0x3003, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let expected = "\nMemory content [0x3000..0x3003] :\n\
                    -------------------------------------\n  \
                    0x3000 (12288) : 0x1025\n  \
                    0x3002 (12290) : 0xf025\n\
                    \n";
    assert_eq!(text, expected);
}

#[test]
fn mdump_clamps_to_memory() {
    let ctx = TestContext::new();
    let mut out = Vec::new();
    mdump(&ctx.sim, 0xFFFC, 0xFFFF, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().filter(|l| l.contains(" : 0x")).count(), 2);
}
