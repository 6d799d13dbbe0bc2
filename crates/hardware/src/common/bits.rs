//! Bit-field helpers for 16-bit datapath values.
//!
//! Instruction fields are written `hi:lo` as in the ISA manual, inclusive on both ends.

/// Extracts bits `hi..=lo` of `value`, right-aligned.
#[inline]
pub const fn bits(value: u16, hi: u32, lo: u32) -> u16 {
    let width = hi - lo + 1;
    let mask = if width >= 16 { 0xFFFF } else { (1u16 << width) - 1 };
    (value >> lo) & mask
}

/// Returns bit `n` of `value`.
#[inline]
pub const fn bit(value: u16, n: u32) -> bool {
    (value >> n) & 1 == 1
}

/// Sign-extends the low `width` bits of `value` to 16 bits.
#[inline]
pub const fn sext(value: u16, width: u32) -> u16 {
    let shift = 16 - width;
    (((value << shift) as i16) >> shift) as u16
}
