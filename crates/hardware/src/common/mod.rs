//! Common utilities and types used throughout the simulator.
//!
//! This module provides building blocks shared by every component:
//! 1. **Constants:** Control store geometry, memory size, and simulation sentinels.
//! 2. **Bit Fields:** Extraction and sign extension for instruction fields.
//! 3. **Error Handling:** Load-time, configuration, and run-time error types.
//! 4. **Register Management:** The eight-entry general-purpose register file.

/// Bit-field extraction and sign extension.
pub mod bits;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use bits::{bit, bits, sext};
pub use error::{ConfigError, LoadError, SimError};
pub use reg::RegisterFile;
