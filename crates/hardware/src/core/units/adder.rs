//! Address adder.
//!
//! Computes `ADDR1MUX + (ADDR2MUX << LSHF1)` for PC-relative and base+offset addressing.

use crate::common::bits::{bits, sext};
use crate::core::arch::Latches;
use crate::core::control::signals::{Addr1Mux, Addr2Mux};

/// The address adder.
#[derive(Debug)]
pub struct AddressAdder;

impl AddressAdder {
    /// Selects the offset operand and applies `LSHF1`.
    pub const fn offset(ir: u16, select: Addr2Mux, lshf1: bool) -> u16 {
        let offset = match select {
            Addr2Mux::Zero => 0,
            Addr2Mux::Offset6 => sext(bits(ir, 5, 0), 6),
            Addr2Mux::PcOffset9 => sext(bits(ir, 8, 0), 9),
            Addr2Mux::PcOffset11 => sext(bits(ir, 10, 0), 11),
        };
        if lshf1 { offset << 1 } else { offset }
    }

    /// Evaluates the adder for the current cycle.
    pub const fn evaluate(latches: &Latches) -> u16 {
        let word = &latches.microinstruction;
        let base = match word.addr1mux {
            Addr1Mux::Pc => latches.pc,
            Addr1Mux::BaseR => latches.regs.read(bits(latches.ir, 8, 6) as usize),
        };
        base.wrapping_add(Self::offset(latches.ir, word.addr2mux, word.lshf1))
    }
}
