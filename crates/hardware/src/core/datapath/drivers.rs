//! Bus driver evaluation.
//!
//! Evaluates every unit that can drive the bus, whether or not it is gated this cycle.
//! The arbiter then picks at most one of these candidates.

use crate::core::arch::Latches;
use crate::core::units::mux::mar_mux;
use crate::core::units::{AddressAdder, Alu, Shifter};

/// Candidate bus values for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusDrivers {
    /// ALU output.
    pub alu: u16,
    /// Current program counter.
    pub pc: u16,
    /// Shifter output, `None` when `IR[5:4]` holds the reserved mode.
    pub shifter: Option<u16>,
    /// Current MDR.
    pub mdr: u16,
    /// MAR mux output.
    pub marmux: u16,
    /// Address adder output. Not a bus driver itself, but shared by PCMUX and MARMUX.
    pub adder: u16,
}

impl BusDrivers {
    /// Evaluates every driver from the frozen current latches.
    pub const fn evaluate(latches: &Latches) -> Self {
        let adder = AddressAdder::evaluate(latches);
        Self {
            alu: Alu::evaluate(latches),
            pc: latches.pc,
            shifter: Shifter::evaluate(latches),
            mdr: latches.mdr,
            marmux: mar_mux(latches.microinstruction.marmux, latches.ir, adder),
            adder,
        }
    }
}
