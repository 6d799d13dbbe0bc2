//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the datapath ALU and its operand muxes:
//! - **SR1MUX** picks operand A from `IR[11:9]` or `IR[8:6]`.
//! - **SR2MUX** picks operand B from `R[IR[2:0]]` or `SEXT(IR[4:0])`, steered by `IR[5]`.
//!
//! The shifter shares the register file read ports and lives in [`shifts`].

/// Shift operations (LSHF, RSHFL, RSHFA).
pub mod shifts;

use crate::common::bits::{bit, bits, sext};
use crate::core::arch::Latches;
use crate::core::control::signals::{AluOp, Sr1Mux};

/// Arithmetic Logic Unit.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - Operation selected by `ALUK`.
    /// * `a`  - Operand A (SR1).
    /// * `b`  - Operand B (SR2 or the immediate).
    ///
    /// # Returns
    ///
    /// The 16-bit result; addition wraps.
    ///
    /// # Examples
    ///
    /// ```
    /// use lc3bsim_core::core::units::alu::Alu;
    /// use lc3bsim_core::core::control::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF, 1), 0x0000);
    /// assert_eq!(Alu::execute(AluOp::And, 0xFF0F, 0x0FF0), 0x0F00);
    /// assert_eq!(Alu::execute(AluOp::Xor, 0xAAAA, 0xFFFF), 0x5555);
    /// assert_eq!(Alu::execute(AluOp::PassA, 0x1234, 0xFFFF), 0x1234);
    /// ```
    pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::And => a & b,
            AluOp::Xor => a ^ b,
            AluOp::PassA => a,
        }
    }

    /// Reads both ALU operands from the current latches.
    pub const fn operands(latches: &Latches) -> (u16, u16) {
        let ir = latches.ir;
        let sr1 = match latches.microinstruction.sr1mux {
            Sr1Mux::Ir11_9 => bits(ir, 11, 9),
            Sr1Mux::Ir8_6 => bits(ir, 8, 6),
        };
        let a = latches.regs.read(sr1 as usize);
        let b = if bit(ir, 5) {
            sext(bits(ir, 4, 0), 5)
        } else {
            latches.regs.read(bits(ir, 2, 0) as usize)
        };
        (a, b)
    }

    /// Evaluates the ALU for the current cycle.
    pub const fn evaluate(latches: &Latches) -> u16 {
        let (a, b) = Self::operands(latches);
        Self::execute(latches.microinstruction.aluk, a, b)
    }
}
