//! Memory subsystem: storage and access timing.

/// Main memory and its timing unit.
pub mod memory;

pub use self::memory::Memory;
pub use self::memory::MemoryTimingUnit;
