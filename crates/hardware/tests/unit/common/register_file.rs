//! Register file tests.

use lc3bsim_core::common::RegisterFile;

#[test]
fn starts_zeroed() {
    let regs = RegisterFile::new();
    assert!(regs.iter().all(|(_, value)| value == 0));
    assert_eq!(regs.iter().count(), 8);
}

#[test]
fn write_then_read() {
    let mut regs = RegisterFile::new();
    regs.write(3, 0xBEEF);
    regs.write(7, 0x1234);
    assert_eq!(regs.read(3), 0xBEEF);
    assert_eq!(regs.read(7), 0x1234);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn index_is_three_bits() {
    let mut regs = RegisterFile::new();
    regs.write(9, 0x55);
    assert_eq!(regs.read(1), 0x55);
}
