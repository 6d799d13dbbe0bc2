//! Instruction Set Architecture (ISA) helpers.
//!
//! The simulator executes instructions purely through microcode; nothing here is on the
//! cycle path. These helpers name opcodes and render instructions for traces and dumps.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode decoding.
pub mod opcode;

pub use self::opcode::Opcode;
