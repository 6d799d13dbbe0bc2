//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Control Store Constants:** Row count and control word width.
//! 2. **Memory Constants:** Word count and default access latency.
//! 3. **Register Constants:** Register file size and the subroutine link register.
//! 4. **Simulation Constants:** Initial state and halt sentinel.

/// Number of rows in the control store (one per 6-bit state index).
pub const CONTROL_STORE_ROWS: usize = 64;

/// Number of control bits in one microinstruction.
pub const CONTROL_STORE_BITS: usize = 35;

/// Mask applied to any value used as a state index.
pub const STATE_MASK: u8 = 0x3F;

/// State the micro-sequencer starts in after initialization (instruction fetch).
pub const INITIAL_STATE_NUMBER: u8 = 18;

/// Number of 16-bit words in main memory (covers the full 16-bit byte address space).
pub const WORDS_IN_MEM: usize = 0x08000;

/// Cycles needed to complete one memory access.
pub const MEM_CYCLES: u32 = 5;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Register written by subroutine-linkage microcode (JSR, JSRR, TRAP).
pub const LINK_REGISTER: usize = 7;

/// Program counter value that halts the machine at the start of a cycle.
pub const HALT_PC: u16 = 0x0000;
