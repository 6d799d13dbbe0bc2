//! Architectural state latches.
//!
//! The simulator keeps two copies of [`Latches`]: the frozen `current` snapshot every unit
//! reads during a cycle, and the `next` snapshot that latch update writes. `next` replaces
//! `current` only after the whole cycle has been evaluated.

use serde::Serialize;

use crate::common::RegisterFile;
use crate::core::arch::cc::ConditionCode;
use crate::core::control::ControlWord;

/// Every clocked register in the machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Latches {
    /// Program counter.
    pub pc: u16,
    /// Instruction register.
    pub ir: u16,
    /// Memory address register.
    pub mar: u16,
    /// Memory data register.
    pub mdr: u16,
    /// Condition codes.
    pub cc: ConditionCode,
    /// Branch-enable.
    pub ben: bool,
    /// Memory-ready, latched one cycle after the memory raises it.
    pub ready: bool,
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Current control store index.
    pub state_number: u8,
    /// Microinstruction executing this cycle.
    pub microinstruction: ControlWord,
}

impl Latches {
    /// Creates the reset state: everything cleared, Z set, sitting in `state` with its
    /// control word.
    pub fn reset(state: u8, word: ControlWord) -> Self {
        Self {
            cc: ConditionCode::Zero,
            state_number: state,
            microinstruction: word,
            ..Self::default()
        }
    }
}
