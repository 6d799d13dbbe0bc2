//! Shifter.
//!
//! Shifts `R[IR[8:6]]` by `IR[3:0]`. `IR[5:4]` picks the mode; `10` is not part of the
//! instruction set and is reported as unavailable rather than given a value.

use crate::common::bits::bits;
use crate::core::arch::Latches;

/// Shift mode decoded from `IR[5:4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftMode {
    /// Logical left shift (`00`).
    Lshf,
    /// Logical right shift (`01`).
    Rshfl,
    /// Arithmetic right shift, replicating bit 15 (`11`).
    Rshfa,
}

impl ShiftMode {
    /// Decodes `IR[5:4]`. Returns `None` for the reserved code `10`.
    pub const fn decode(ir: u16) -> Option<Self> {
        match bits(ir, 5, 4) {
            0b00 => Some(Self::Lshf),
            0b01 => Some(Self::Rshfl),
            0b11 => Some(Self::Rshfa),
            _ => None,
        }
    }
}

/// Datapath shifter.
#[derive(Debug)]
pub struct Shifter;

impl Shifter {
    /// Executes a shift.
    ///
    /// # Arguments
    ///
    /// * `mode`   - Shift mode.
    /// * `value`  - Value to shift.
    /// * `amount` - Shift amount; only the low four bits are used.
    pub const fn execute(mode: ShiftMode, value: u16, amount: u16) -> u16 {
        let amount = (amount & 0xF) as u32;
        match mode {
            ShiftMode::Lshf => value << amount,
            ShiftMode::Rshfl => value >> amount,
            ShiftMode::Rshfa => ((value as i16) >> amount) as u16,
        }
    }

    /// Evaluates the shifter for the current cycle.
    ///
    /// Returns `None` when `IR[5:4]` holds the reserved mode.
    pub const fn evaluate(latches: &Latches) -> Option<u16> {
        let ir = latches.ir;
        match ShiftMode::decode(ir) {
            Some(mode) => {
                let value = latches.regs.read(bits(ir, 8, 6) as usize);
                Some(Self::execute(mode, value, bits(ir, 3, 0)))
            }
            None => None,
        }
    }
}
