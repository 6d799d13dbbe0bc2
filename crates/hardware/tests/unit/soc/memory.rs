//! Main memory tests.

use lc3bsim_core::common::LoadError;
use lc3bsim_core::core::control::signals::DataSize;
use lc3bsim_core::sim::loader::ProgramImage;
use lc3bsim_core::soc::memory::Memory;

#[test]
fn starts_zeroed() {
    let memory = Memory::new();
    assert_eq!(memory.len_words(), 0x8000);
    assert_eq!(memory.word(0), 0);
    assert_eq!(memory.word(0x7FFF), 0);
}

#[test]
fn word_access_is_little_endian_by_lane() {
    let mut memory = Memory::new();
    memory.write(0x3000, 0xABCD, DataSize::Word);
    assert_eq!(memory.lanes(0x1800), [0xCD, 0xAB]);
    assert_eq!(memory.read(0x3000, DataSize::Word), 0xABCD);
    // Bit 0 is ignored for word accesses.
    assert_eq!(memory.read(0x3001, DataSize::Word), 0xABCD);
}

#[test]
fn byte_reads_sign_extend_the_selected_lane() {
    let mut memory = Memory::new();
    memory.write(0x3000, 0x807F, DataSize::Word);
    assert_eq!(memory.read(0x3000, DataSize::Byte), 0x007F);
    assert_eq!(memory.read(0x3001, DataSize::Byte), 0xFF80);
}

#[test]
fn byte_writes_touch_one_lane() {
    let mut memory = Memory::new();
    memory.write(0x3000, 0x1234, DataSize::Word);
    memory.write(0x3001, 0x00EE, DataSize::Byte);
    assert_eq!(memory.word(0x1800), 0xEE34);
    memory.write(0x3000, 0xFF11, DataSize::Byte);
    assert_eq!(memory.word(0x1800), 0xEE11);
}

#[test]
fn loads_an_image_at_its_word_address() {
    let mut memory = Memory::new();
    let image = ProgramImage {
        load_address: 0x3000,
        words: vec![0x5020, 0x1025],
    };
    memory.load_image(&image).unwrap();
    assert_eq!(memory.word(0x1800), 0x5020);
    assert_eq!(memory.word(0x1801), 0x1025);
}

#[test]
fn rejects_an_image_past_the_end() {
    let mut memory = Memory::new();
    let image = ProgramImage {
        load_address: 0xFFFE,
        words: vec![1, 2],
    };
    let err = memory.load_image(&image).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ProgramTooLong {
            base: 0x7FFF,
            words: 2
        }
    ));
    assert_eq!(memory.word(0x7FFF), 0);
}
