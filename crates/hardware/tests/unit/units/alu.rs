//! ALU tests: raw operations and operand selection from the latches.

use lc3bsim_core::core::control::signals::{AluOp, Sr1Mux};
use lc3bsim_core::core::units::Alu;
use rstest::rstest;

use crate::common::fixtures::{WordBuilder, latches};

// ─── Raw operations ──────────────────────────────────────────────────────────

#[rstest]
#[case(AluOp::Add, 0x0001, 0x0001, 0x0002)]
#[case(AluOp::Add, 0x7FFF, 0x0001, 0x8000)]
#[case(AluOp::Add, 0xFFFF, 0x0001, 0x0000)]
#[case(AluOp::Add, 0x8000, 0x8000, 0x0000)]
#[case(AluOp::And, 0xFF0F, 0x0FF0, 0x0F00)]
#[case(AluOp::And, 0x1234, 0x0000, 0x0000)]
#[case(AluOp::Xor, 0xAAAA, 0xFFFF, 0x5555)]
#[case(AluOp::Xor, 0x1234, 0x1234, 0x0000)]
#[case(AluOp::PassA, 0x1234, 0xFFFF, 0x1234)]
#[case(AluOp::PassA, 0x0000, 0xFFFF, 0x0000)]
fn executes(#[case] op: AluOp, #[case] a: u16, #[case] b: u16, #[case] want: u16) {
    assert_eq!(Alu::execute(op, a, b), want);
}

// ─── Operand selection ───────────────────────────────────────────────────────

#[test]
fn immediate_operand_is_sign_extended() {
    let mut word = WordBuilder::new().gate_alu().build();
    word.sr1mux = Sr1Mux::Ir8_6;
    // ADD R2, R2, #-1
    let mut l = latches(word, 0x14BF);
    l.regs.write(2, 10);
    assert_eq!(Alu::operands(&l), (10, 0xFFFF));
    assert_eq!(Alu::evaluate(&l), 9);
}

#[test]
fn register_operand_uses_ir_2_0() {
    let mut word = WordBuilder::new().gate_alu().build();
    word.sr1mux = Sr1Mux::Ir8_6;
    word.aluk = AluOp::And;
    // AND R1, R2, R3
    let mut l = latches(word, 0x5283);
    l.regs.write(2, 0x0FF0);
    l.regs.write(3, 0x00FF);
    assert_eq!(Alu::evaluate(&l), 0x00F0);
}

#[test]
fn sr1mux_selects_ir_11_9() {
    let mut word = WordBuilder::new().gate_alu().build();
    word.sr1mux = Sr1Mux::Ir11_9;
    word.aluk = AluOp::PassA;
    // STW R1, R2, #0: the store source sits in IR[11:9]
    let mut l = latches(word, 0x7280);
    l.regs.write(1, 0xCAFE);
    l.regs.write(2, 0x3000);
    assert_eq!(Alu::evaluate(&l), 0xCAFE);
}
