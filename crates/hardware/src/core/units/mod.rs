//! Combinational datapath units.
//!
//! Every unit is a pure function of the current latches, re-evaluated each cycle:
//! 1. **ALU:** add, and, xor, pass-through, plus the shifter in [`alu::shifts`].
//! 2. **Address adder:** base plus scaled sign-extended offset.
//! 3. **Muxes:** PC input and MAR input selection.

/// Address adder.
pub mod adder;

/// ALU and shifter.
pub mod alu;

/// PC and MAR muxes.
pub mod mux;

pub use self::adder::AddressAdder;
pub use self::alu::Alu;
pub use self::alu::shifts::Shifter;
