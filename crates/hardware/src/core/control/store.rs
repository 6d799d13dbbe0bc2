//! Control store ROM.
//!
//! Holds the 64 decoded microinstructions. The store is built once from a microprogram
//! and never changes for the life of the simulator.

use crate::common::constants::{CONTROL_STORE_ROWS, STATE_MASK};
use crate::core::control::signals::ControlWord;

/// Read-only table of microinstructions indexed by state number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlStore {
    rows: [ControlWord; CONTROL_STORE_ROWS],
}

impl ControlStore {
    /// Creates a control store from fully decoded rows.
    pub const fn new(rows: [ControlWord; CONTROL_STORE_ROWS]) -> Self {
        Self { rows }
    }

    /// Returns the microinstruction for a state.
    ///
    /// Total over every `u8`: only the low six bits select the row.
    #[inline]
    pub const fn lookup(&self, state: u8) -> &ControlWord {
        &self.rows[(state & STATE_MASK) as usize]
    }

    /// Iterates over `(state, word)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &ControlWord)> + '_ {
        self.rows.iter().enumerate().map(|(i, w)| (i as u8, w))
    }
}
