//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (initial state, halt sentinel, memory latency).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Validation:** Rejection of values the machine cannot run with.
//!
//! Configuration is read from JSON; every field is optional and falls back to the defaults
//! below, so `{}` is a complete configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::constants::{CONTROL_STORE_ROWS, HALT_PC, INITIAL_STATE_NUMBER, MEM_CYCLES};

/// Default configuration constants for the simulator.
mod defaults {
    use super::{HALT_PC, INITIAL_STATE_NUMBER, MEM_CYCLES};

    /// State the micro-sequencer starts in (the instruction fetch state).
    pub const INITIAL_STATE: u8 = INITIAL_STATE_NUMBER;

    /// PC value that halts the run.
    pub const HALT: u16 = HALT_PC;

    /// Cycles per memory access.
    pub const ACCESS_CYCLES: u32 = MEM_CYCLES;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use lc3bsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_states": true, "max_cycles": 100000 },
///     "memory": { "access_cycles": 5 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_states);
/// assert_eq!(config.general.initial_state, 18);
/// assert_eq!(config.general.max_cycles, Some(100000));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory timing settings
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks that the machine can run with these settings.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.general.initial_state as usize >= CONTROL_STORE_ROWS {
            return Err(ConfigError::InitialState(self.general.initial_state));
        }
        if self.memory.access_cycles < 2 {
            return Err(ConfigError::AccessCycles(self.memory.access_cycles));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a debug event for every cycle (state, bus, fetched instruction)
    #[serde(default)]
    pub trace_states: bool,

    /// Control store row executed in the first cycle
    #[serde(default = "GeneralConfig::default_initial_state")]
    pub initial_state: u8,

    /// PC value that halts the machine at the start of a cycle
    #[serde(default = "GeneralConfig::default_halt_pc")]
    pub halt_pc: u16,

    /// Upper bound on cycles for a run-to-halt; `None` runs until the PC reaches `halt_pc`
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default initial state.
    const fn default_initial_state() -> u8 {
        defaults::INITIAL_STATE
    }

    /// Returns the default halt sentinel.
    const fn default_halt_pc() -> u16 {
        defaults::HALT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_states: false,
            initial_state: defaults::INITIAL_STATE,
            halt_pc: defaults::HALT,
            max_cycles: None,
        }
    }
}

/// Memory timing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Cycles from the first `MIO.EN` cycle to completion; ready is raised one cycle earlier
    #[serde(default = "MemoryConfig::default_access_cycles")]
    pub access_cycles: u32,
}

impl MemoryConfig {
    /// Returns the default access latency.
    const fn default_access_cycles() -> u32 {
        defaults::ACCESS_CYCLES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            access_cycles: defaults::ACCESS_CYCLES,
        }
    }
}
