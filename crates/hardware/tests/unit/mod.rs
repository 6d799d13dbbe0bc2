//! # Unit Components
//!
//! Tests for each part of the machine, leaf components first.


/// Simulator configuration.
pub mod config;




/// Loaders, the cycle loop, dumps, and complete programs.
pub mod sim;

/// Memory and the memory timing unit.
pub mod soc;
