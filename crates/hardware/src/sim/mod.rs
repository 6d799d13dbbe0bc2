//! Simulation: loaders, the top-level simulator, and dumps.

/// Register and memory dumps.
pub mod dump;

/// Microprogram and program image loaders.
pub mod loader;

/// Cycle loop and run control.
pub mod simulator;

pub use self::simulator::{RunOutcome, RunStatus, Simulator};
