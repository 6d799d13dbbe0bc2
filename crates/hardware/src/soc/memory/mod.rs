//! Main memory.
//!
//! This module implements the word-organised main memory. It provides:
//! 1. **Storage:** Words of two independently writable byte lanes (low, high).
//! 2. **Access:** Byte and word reads and writes by byte address.
//! 3. **Controller:** Multi-cycle access timing in [`controller`].

/// Memory access timing unit.
pub mod controller;

pub use self::controller::MemoryTimingUnit;

use crate::common::LoadError;
use crate::common::bits::sext;
use crate::common::constants::WORDS_IN_MEM;
use crate::core::control::signals::DataSize;
use crate::sim::loader::ProgramImage;

/// Word-addressable memory with two byte lanes per word.
///
/// Lane 0 holds the least significant byte of the word, lane 1 the most significant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<[u8; 2]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zeroed memory of [`WORDS_IN_MEM`] words.
    pub fn new() -> Self {
        Self {
            words: vec![[0; 2]; WORDS_IN_MEM],
        }
    }

    /// Number of words.
    pub const fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Returns both byte lanes of a word, `[low, high]`.
    pub fn lanes(&self, word_addr: usize) -> [u8; 2] {
        self.words[word_addr % WORDS_IN_MEM]
    }

    /// Reads a whole word by word address.
    pub fn word(&self, word_addr: usize) -> u16 {
        u16::from_le_bytes(self.lanes(word_addr))
    }

    /// Reads memory the way the datapath does.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address. For word reads bit 0 is ignored.
    /// * `size` - `Word` combines both lanes; `Byte` sign-extends the lane picked by `addr[0]`.
    pub fn read(&self, addr: u16, size: DataSize) -> u16 {
        let lanes = self.lanes(usize::from(addr >> 1));
        match size {
            DataSize::Word => u16::from_le_bytes(lanes),
            DataSize::Byte => sext(u16::from(lanes[usize::from(addr & 1)]), 8),
        }
    }

    /// Writes memory the way the datapath does.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address. For word writes bit 0 is ignored.
    /// * `data` - Source value (MDR).
    /// * `size` - `Word` writes both lanes; `Byte` writes `data[7:0]` to the lane picked by `addr[0]`.
    pub fn write(&mut self, addr: u16, data: u16, size: DataSize) {
        let lanes = &mut self.words[usize::from(addr >> 1)];
        match size {
            DataSize::Word => *lanes = data.to_le_bytes(),
            DataSize::Byte => lanes[usize::from(addr & 1)] = data as u8,
        }
    }

    /// Places a program image, one word per entry, starting at its load address.
    ///
    /// # Returns
    ///
    /// [`LoadError::ProgramTooLong`] if the image runs past the last word; memory is left
    /// untouched in that case.
    pub fn load_image(&mut self, image: &ProgramImage) -> Result<(), LoadError> {
        let base = image.base_word();
        let end = base + image.words.len();
        if end > self.words.len() {
            return Err(LoadError::ProgramTooLong {
                base,
                words: image.words.len(),
            });
        }
        for (slot, word) in self.words[base..end].iter_mut().zip(&image.words) {
            *slot = word.to_le_bytes();
        }
        Ok(())
    }
}
