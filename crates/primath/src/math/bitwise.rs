//! 64-bit integer bit manipulation.
//!
//! Shift counts wrap modulo 64, matching what the hardware shift
//! instructions do with an out-of-range count.

/// Bitwise AND.
#[inline]
pub fn bitwise_and(a: u64, b: u64) -> u64 {
    a & b
}

/// Bitwise OR.
#[inline]
pub fn bitwise_or(a: u64, b: u64) -> u64 {
    a | b
}

/// Bitwise XOR.
#[inline]
pub fn bitwise_xor(a: u64, b: u64) -> u64 {
    a ^ b
}

/// Logical left shift by `shift mod 64`.
#[inline]
pub fn shift_left(value: u64, shift: u64) -> u64 {
    value.wrapping_shl((shift % 64) as u32)
}

/// Logical right shift by `shift mod 64`.
#[inline]
pub fn shift_right(value: u64, shift: u64) -> u64 {
    value.wrapping_shr((shift % 64) as u32)
}

/// Number of set bits.
#[inline]
pub fn count_set_bits(value: u64) -> u64 {
    u64::from(value.count_ones())
}

/// `value` with its bit order reversed (bit 0 becomes bit 63).
#[inline]
pub fn reverse_bits(value: u64) -> u64 {
    value.reverse_bits()
}
