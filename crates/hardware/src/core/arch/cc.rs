//! Condition codes.
//!
//! The N, Z, and P flags are mutually exclusive. Modelling them as one three-way value
//! makes that exclusivity structural: branch-enable can never see two flags at once.

use serde::Serialize;

use crate::common::bits::bit;

/// The single condition flag that is currently set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ConditionCode {
    /// Last value written had bit 15 set.
    Negative,
    /// Last value written was zero.
    #[default]
    Zero,
    /// Last value written was positive.
    Positive,
}

impl ConditionCode {
    /// Classifies a bus value.
    pub const fn from_value(value: u16) -> Self {
        if value == 0 {
            Self::Zero
        } else if bit(value, 15) {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// N flag.
    pub const fn n(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Z flag.
    pub const fn z(self) -> bool {
        matches!(self, Self::Zero)
    }

    /// P flag.
    pub const fn p(self) -> bool {
        matches!(self, Self::Positive)
    }

    /// Branch-enable for a BR instruction.
    ///
    /// `IR[11]·N + IR[10]·Z + IR[9]·P`. Only one product term can be non-zero.
    pub const fn branch_enable(self, ir: u16) -> bool {
        match self {
            Self::Negative => bit(ir, 11),
            Self::Zero => bit(ir, 10),
            Self::Positive => bit(ir, 9),
        }
    }
}
