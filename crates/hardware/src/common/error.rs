//! Error definitions.
//!
//! Errors fall into two tiers:
//! 1. **Configuration time:** [`LoadError`] and [`ConfigError`]. The simulator cannot be
//!    built from bad inputs, so callers treat these as fatal.
//! 2. **Run time:** [`SimError`]. A microinstruction asked the datapath for something the
//!    hardware does not define. The cycle is abandoned before any latch is committed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::datapath::bus::BusDriver;

/// Undefined datapath behaviour detected while evaluating a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// More than one gate-enable was asserted in the same microinstruction.
    #[error("bus contention in state {state}: {drivers:?} gated onto the bus together")]
    BusContention {
        /// State number of the offending microinstruction.
        state: u8,
        /// Every driver whose gate was asserted.
        drivers: Vec<BusDriver>,
    },

    /// A register loads from the bus but no unit drives it.
    #[error("state {state} latches from the bus but no unit drives it")]
    UndrivenBus {
        /// State number of the offending microinstruction.
        state: u8,
    },

    /// The shifter was gated with the reserved mode `IR[5:4] = 10`.
    #[error("reserved shifter mode in IR {ir:#06x} (state {state})")]
    ReservedShiftMode {
        /// State number of the offending microinstruction.
        state: u8,
        /// Instruction register contents.
        ir: u16,
    },
}

/// Failure while reading the microprogram or a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("can't open {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The microprogram has fewer rows than the control store.
    #[error("too few lines ({found}) in micro-code file")]
    TooFewLines {
        /// Number of rows actually present.
        found: usize,
    },

    /// A microprogram row ended before all control bits were read.
    #[error("too few control bits in micro-code line {line}")]
    ShortLine {
        /// Zero-based row number.
        line: usize,
    },

    /// A microprogram row contains something other than `0` or `1`.
    #[error("unknown value {found:?} in micro-code line {line}, bit {bit}")]
    InvalidBit {
        /// Zero-based row number.
        line: usize,
        /// Zero-based bit position.
        bit: usize,
        /// Offending character.
        found: char,
    },

    /// A multi-bit selector holds a value the datapath does not define.
    #[error("reserved {field} value {value} in micro-code line {line}")]
    ReservedField {
        /// Zero-based row number.
        line: usize,
        /// Control field name.
        field: &'static str,
        /// Decoded field value.
        value: u8,
    },

    /// The program image has no load address.
    #[error("program file is empty")]
    EmptyProgram,

    /// A program token is not a 16-bit hex number.
    #[error("invalid hex word {token:?} at token {index}")]
    InvalidWord {
        /// Offending token.
        token: String,
        /// Zero-based token index.
        index: usize,
    },

    /// The program image does not fit in memory.
    #[error("program is too long to fit in memory ({words} words from word address {base:#06x})")]
    ProgramTooLong {
        /// First word address of the image.
        base: usize,
        /// Number of words in the image.
        words: usize,
    },
}

/// Invalid simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("can't read config {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The initial state does not index the control store.
    #[error("initial state {0} is outside the control store (0..64)")]
    InitialState(u8),

    /// The memory latency leaves no cycle between ready and completion.
    #[error("memory access must take at least 2 cycles, got {0}")]
    AccessCycles(u32),
}
