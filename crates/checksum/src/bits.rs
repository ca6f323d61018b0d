//! Byte extraction and bit reflection helpers.
//!
//! "Reflected" means bit-reversed. The CRC engines reflect single input bytes
//! and reassemble finalized registers from reflected bytes in swapped order,
//! which is a full reflection of the active width.

/// Extract byte `n` of `value`, where byte 0 is the least significant.
///
/// `n` must be below 4; higher indices yield 0.
#[inline]
#[must_use]
pub const fn nth_byte(value: u32, n: u32) -> u8 {
  if n >= 4 { 0 } else { (value >> (n * 8)) as u8 }
}

/// Reverse the bit order of a byte.
#[inline]
#[must_use]
pub const fn reverse_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

/// Reflect the low 16 bits of `value`: swap bytes 0 and 1 and bit-reverse each.
#[inline]
#[must_use]
pub const fn reflect16(value: u32) -> u32 {
  (reverse_byte(nth_byte(value, 1)) as u32) | ((reverse_byte(nth_byte(value, 0)) as u32) << 8)
}

/// Reflect all 32 bits of `value`: reverse byte order and bit-reverse each byte.
#[inline]
#[must_use]
pub const fn reflect32(value: u32) -> u32 {
  (reverse_byte(nth_byte(value, 3)) as u32)
    | ((reverse_byte(nth_byte(value, 2)) as u32) << 8)
    | ((reverse_byte(nth_byte(value, 1)) as u32) << 16)
    | ((reverse_byte(nth_byte(value, 0)) as u32) << 24)
}

/// Mask covering the low `width` bits.
#[inline]
#[must_use]
pub const fn width_mask(width: u32) -> u32 {
  if width >= 32 { u32::MAX } else { (1u32 << width) - 1 }
}
