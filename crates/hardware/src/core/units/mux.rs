//! PC and MAR input multiplexers.

use crate::common::bits::bits;
use crate::core::control::signals::{MarMux, PcMux};

/// Value presented to the PC input.
///
/// # Arguments
///
/// * `select` - `PCMUX`.
/// * `pc`     - Current program counter.
/// * `bus`    - Value on the bus this cycle.
/// * `adder`  - Address adder output.
pub const fn pc_mux(select: PcMux, pc: u16, bus: u16, adder: u16) -> u16 {
    match select {
        PcMux::Increment => pc.wrapping_add(2),
        PcMux::Bus => bus,
        PcMux::Adder => adder,
    }
}

/// Value presented by the MAR mux.
///
/// `TrapVector` zero-extends `IR[7:0]` and scales it to a byte address.
pub const fn mar_mux(select: MarMux, ir: u16, adder: u16) -> u16 {
    match select {
        MarMux::TrapVector => bits(ir, 7, 0) << 1,
        MarMux::Adder => adder,
    }
}
