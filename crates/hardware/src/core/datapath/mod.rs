//! Datapath cycle logic: driver evaluation, bus arbitration, and latch update.

/// Single-driver bus arbitration.
pub mod bus;

/// Candidate bus values.
pub mod drivers;

/// Register loads for the next cycle.
pub mod writeback;

pub use self::bus::{BusArbiter, BusDriver};
pub use self::drivers::BusDrivers;
pub use self::writeback::LatchUpdate;
