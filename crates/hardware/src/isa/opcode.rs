//! LC-3b opcodes.
//!
//! The opcode is `IR[15:12]` and doubles as the control store address the micro-sequencer
//! dispatches to when `IRD` is set.

use crate::common::bits::bits;

/// The sixteen primary opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Conditional branch.
    Br,
    /// Add.
    Add,
    /// Load byte.
    Ldb,
    /// Store byte.
    Stb,
    /// Jump to subroutine (`JSR` / `JSRR`).
    Jsr,
    /// Bitwise and.
    And,
    /// Load word.
    Ldw,
    /// Store word.
    Stw,
    /// Return from interrupt.
    Rti,
    /// Bitwise exclusive or (also `NOT`).
    Xor,
    /// Unassigned opcode `1010`.
    Reserved10,
    /// Unassigned opcode `1011`.
    Reserved11,
    /// Jump (also `RET`).
    Jmp,
    /// Shift (`LSHF`, `RSHFL`, `RSHFA`).
    Shf,
    /// Load effective address.
    Lea,
    /// System call through the trap vector table.
    Trap,
}

impl Opcode {
    /// Decodes `IR[15:12]`.
    pub const fn decode(ir: u16) -> Self {
        match bits(ir, 15, 12) {
            0x0 => Self::Br,
            0x1 => Self::Add,
            0x2 => Self::Ldb,
            0x3 => Self::Stb,
            0x4 => Self::Jsr,
            0x5 => Self::And,
            0x6 => Self::Ldw,
            0x7 => Self::Stw,
            0x8 => Self::Rti,
            0x9 => Self::Xor,
            0xA => Self::Reserved10,
            0xB => Self::Reserved11,
            0xC => Self::Jmp,
            0xD => Self::Shf,
            0xE => Self::Lea,
            _ => Self::Trap,
        }
    }

    /// Four-bit encoding, equal to the dispatch state number.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
