//! Latch update.
//!
//! Writes next-cycle values for every register whose load enable is asserted. Registers
//! without a load enable keep the value already copied into `next`.

use crate::common::bits::bits;
use crate::common::constants::LINK_REGISTER;
use crate::core::arch::{ConditionCode, Latches};
use crate::core::control::signals::DrMux;
use crate::core::units::mux::pc_mux;

/// Commits datapath results into the next latch set.
#[derive(Debug)]
pub struct LatchUpdate;

impl LatchUpdate {
    /// Applies one cycle of register loads.
    ///
    /// # Arguments
    ///
    /// * `current`   - Frozen latches for this cycle.
    /// * `next`      - Latches being built; must start as a copy of `current`.
    /// * `bus`       - Value on the bus this cycle.
    /// * `adder`     - Address adder output, for `PCMUX`.
    /// * `read_data` - Data from a memory read that completed this cycle.
    pub fn commit(
        current: &Latches,
        next: &mut Latches,
        bus: u16,
        adder: u16,
        read_data: Option<u16>,
    ) {
        let word = &current.microinstruction;
        let ir = current.ir;

        if word.ld_mar {
            next.mar = bus;
        }
        if word.ld_ir {
            next.ir = bus;
        }
        if word.ld_pc {
            next.pc = pc_mux(word.pcmux, current.pc, bus, adder);
        }
        if word.ld_mdr {
            if word.mio_en {
                if let Some(data) = read_data {
                    next.mdr = data;
                }
            } else {
                next.mdr = bus;
            }
        }
        if word.ld_cc {
            next.cc = ConditionCode::from_value(bus);
        }
        if word.ld_ben {
            next.ben = current.cc.branch_enable(ir);
        }
        if word.ld_reg {
            let dr = match word.drmux {
                DrMux::Ir11_9 => bits(ir, 11, 9) as usize,
                DrMux::R7 => LINK_REGISTER,
            };
            next.regs.write(dr, bus);
        }
    }
}
