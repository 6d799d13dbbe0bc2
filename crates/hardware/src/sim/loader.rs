//! Microprogram and program image loaders.
//!
//! This module turns the two text inputs of a run into machine state. It performs:
//! 1. **Microprogram parsing:** 64 rows of `0`/`1` characters, decoded into named-field
//!    control words. Reserved selector values are rejected here, not at run time.
//! 2. **Program parsing:** whitespace-separated hex tokens. The first token is the byte
//!    load address and the rest are the 16-bit words placed from there on.
//! 3. **File wrappers:** path-based variants that attach the path to I/O errors.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::common::LoadError;
use crate::common::constants::{CONTROL_STORE_BITS, CONTROL_STORE_ROWS};
use crate::core::control::{ControlStore, ControlWord};

/// A parsed program: a byte load address and the words stored from there on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    /// Byte address of the first word.
    pub load_address: u16,
    /// Program words in memory order.
    pub words: Vec<u16>,
}

impl ProgramImage {
    /// Word address of the first word.
    pub const fn base_word(&self) -> usize {
        (self.load_address >> 1) as usize
    }
}

/// Decodes one microprogram row.
fn parse_row(line: usize, text: &str) -> Result<ControlWord, LoadError> {
    let mut raw = [false; CONTROL_STORE_BITS];
    let mut chars = text.chars();

    for (bit, slot) in raw.iter_mut().enumerate() {
        *slot = match chars.next() {
            Some('0') => false,
            Some('1') => true,
            Some(found) => return Err(LoadError::InvalidBit { line, bit, found }),
            None => return Err(LoadError::ShortLine { line }),
        };
    }

    if chars.next().is_some() {
        warn!("extra bit(s) in micro-code line {line} ignored");
    }

    ControlWord::from_bits(&raw).map_err(|reserved| LoadError::ReservedField {
        line,
        field: reserved.field,
        value: reserved.value,
    })
}

/// Parses a microprogram into a control store.
///
/// Each of the first 64 non-blank lines holds one row's control bits in field order.
/// Surrounding whitespace is ignored and rows past the 64th are not read.
///
/// # Returns
///
/// The control store, or the first row that fails to decode.
pub fn parse_control_store(text: &str) -> Result<ControlStore, LoadError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < CONTROL_STORE_ROWS {
        return Err(LoadError::TooFewLines { found: lines.len() });
    }

    let mut rows = [ControlWord::default(); CONTROL_STORE_ROWS];
    for (line, (row, text)) in rows.iter_mut().zip(&lines).enumerate() {
        *row = parse_row(line, text)?;
    }
    Ok(ControlStore::new(rows))
}

/// Reads and parses a microprogram file.
pub fn load_control_store(path: impl AsRef<Path>) -> Result<ControlStore, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_control_store(&text)?;
    info!("loaded micro-code from {}", path.display());
    Ok(store)
}

/// Parses one hex token, with or without a `0x` prefix.
fn parse_word(index: usize, token: &str) -> Result<u16, LoadError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u16::from_str_radix(digits, 16).map_err(|_| LoadError::InvalidWord {
        token: token.to_string(),
        index,
    })
}

/// Parses a program image.
///
/// # Examples
///
/// ```
/// use lc3bsim_core::sim::loader::parse_program;
///
/// let image = parse_program("0x3000\n0x5020\n0x1025\n").unwrap();
/// assert_eq!(image.load_address, 0x3000);
/// assert_eq!(image.base_word(), 0x1800);
/// assert_eq!(image.words, vec![0x5020, 0x1025]);
/// ```
pub fn parse_program(text: &str) -> Result<ProgramImage, LoadError> {
    let mut tokens = text.split_whitespace().enumerate();
    let (index, first) = tokens.next().ok_or(LoadError::EmptyProgram)?;
    let load_address = parse_word(index, first)?;
    let words = tokens
        .map(|(index, token)| parse_word(index, token))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ProgramImage {
        load_address,
        words,
    })
}

/// Reads and parses a program file.
pub fn load_program(path: impl AsRef<Path>) -> Result<ProgramImage, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&text)?;
    info!(
        "read {} words from program into memory at {:#06x}",
        image.words.len(),
        image.load_address
    );
    Ok(image)
}
