//! General-purpose register file.
//!
//! Eight 16-bit registers, `R0` through `R7`. `R7` doubles as the link register for
//! subroutine calls and traps.

use serde::Serialize;

use crate::common::constants::NUM_REGS;

/// The eight-entry register file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Only the low three bits are used.
    pub const fn read(&self, idx: usize) -> u16 {
        self.regs[idx & (NUM_REGS - 1)]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index. Only the low three bits are used.
    /// * `val` - Value to store.
    pub const fn write(&mut self, idx: usize, val: u16) {
        self.regs[idx & (NUM_REGS - 1)] = val;
    }

    /// Iterates over `(index, value)` pairs in register order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        self.regs.iter().copied().enumerate()
    }
}
