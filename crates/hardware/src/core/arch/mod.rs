//! Architectural state: condition codes and the clocked latch set.

/// N/Z/P condition codes.
pub mod cc;

/// Double-buffered latch record.
pub mod latches;

pub use self::cc::ConditionCode;
pub use self::latches::Latches;
