//! Processor core.
//!
//! This module contains the microarchitecture proper: the control unit, the architectural
//! latches, the combinational functional units, and the per-cycle datapath logic that
//! ties them together over the bus.

/// Architectural state (condition codes, latches).
pub mod arch;

/// Control store, control signals, and micro-sequencer.
pub mod control;

/// Bus drivers, bus arbitration, and latch update.
pub mod datapath;

/// Functional units (ALU, shifter, address adder, muxes).
pub mod units;
