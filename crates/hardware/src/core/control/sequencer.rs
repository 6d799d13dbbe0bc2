//! Micro-sequencer.
//!
//! Computes the next control store address from the microinstruction executing this
//! cycle. At most one address bit is data dependent per microinstruction; the only other
//! path is the opcode dispatch taken when `IRD` is set.

use crate::common::bits::{bit, bits};
use crate::common::constants::STATE_MASK;
use crate::core::control::signals::{Cond, ControlWord};

/// Next-state logic of the control unit.
#[derive(Debug)]
pub struct MicroSequencer;

impl MicroSequencer {
    /// Computes the next state number.
    ///
    /// # Arguments
    ///
    /// * `word`  - Microinstruction latched for the current cycle.
    /// * `ir`    - Current instruction register.
    /// * `ready` - Memory-ready latch.
    /// * `ben`   - Branch-enable latch.
    ///
    /// # Returns
    ///
    /// A state number in `0..64`.
    pub const fn next_state(word: &ControlWord, ir: u16, ready: bool, ben: bool) -> u8 {
        if word.ird {
            return bits(ir, 15, 12) as u8;
        }

        let j = word.j & STATE_MASK;
        match word.cond {
            Cond::Unconditional => j,
            Cond::MemoryReady => with_bit(j, 1, ready),
            Cond::Branch => with_bit(j, 2, ben),
            Cond::AddressingMode => with_bit(j, 0, bit(ir, 11)),
        }
    }
}

/// Overrides bit `n` of `j`.
const fn with_bit(j: u8, n: u32, value: bool) -> u8 {
    (j & !(1 << n)) | ((value as u8) << n)
}
