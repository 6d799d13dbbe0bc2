//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and validation.

use std::io::Write;

use lc3bsim_core::common::ConfigError;
use lc3bsim_core::config::*;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_states);
    assert_eq!(config.general.initial_state, 18);
    assert_eq!(config.general.halt_pc, 0x0000);
    assert_eq!(config.general.max_cycles, None);
    assert_eq!(config.memory.access_cycles, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_is_default() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.general.initial_state, 18);
    assert_eq!(config.memory.access_cycles, 5);
}

#[test]
fn test_partial_sections() {
    let config = Config::from_json_str(r#"{ "memory": { "access_cycles": 3 } }"#).unwrap();
    assert_eq!(config.memory.access_cycles, 3);
    assert_eq!(config.general.initial_state, 18);
}

#[test]
fn test_rejects_initial_state_outside_store() {
    let err = Config::from_json_str(r#"{ "general": { "initial_state": 64 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InitialState(64)));
}

#[test]
fn test_rejects_single_cycle_memory() {
    let err = Config::from_json_str(r#"{ "memory": { "access_cycles": 1 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::AccessCycles(1)));
}

#[test]
fn test_malformed_json() {
    let err = Config::from_json_str(r#"{ "general": "#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "halt_pc": 4096, "trace_states": true }} }}"#).unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.general.halt_pc, 0x1000);
    assert!(config.general.trace_states);
}

#[test]
fn test_custom_halt_pc_and_latency_drive_the_run() {
    use crate::common::harness::TestContext;
    use lc3bsim_core::sim::RunOutcome;

    let json = r#"{ "general": { "halt_pc": 12292 }, "memory": { "access_cycles": 3 } }"#;
    let config = Config::from_json_str(json).unwrap();
    // ADD R0, R0, #5 at 0x3000. The next fetch moves the PC to 0x3004.
    let mut ctx = TestContext::with_config(&config).load_words(0x3000, &[0x1025]);
    // Fetch is 18, three cycles in 33, 35, 32; then ADD, then 18 again.
    assert_eq!(ctx.go(), RunOutcome::Halted { cycles: 8 });
    assert_eq!(ctx.reg(0), 5);
}
