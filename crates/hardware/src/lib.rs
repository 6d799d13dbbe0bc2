//! LC-3b microarchitecture simulator library.
//!
//! This crate implements a cycle-accurate LC-3b simulator at the microarchitecture level:
//! 1. **Control:** A 64-row microprogrammed control store and the micro-sequencer.
//! 2. **Datapath:** ALU, shifter, address adder, PC and MAR muxes, and single-driver bus
//!    arbitration feeding double-buffered latches.
//! 3. **Memory:** Two-lane word memory behind a fixed-latency timing unit.
//! 4. **Simulation:** Loaders, the cycle loop, dumps, configuration, and statistics.

/// Common types and constants (bit helpers, errors, register file).
pub mod common;
/// Simulator configuration (defaults and JSON-backed structures).
pub mod config;
/// Control unit, datapath units, and architectural latches.
pub mod core;
/// Opcode names and the disassembler.
pub mod isa;
/// Loaders, the cycle loop, and dumps.
pub mod sim;
/// Main memory and its timing unit.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
