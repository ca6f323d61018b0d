//! Byte-wise XOR checksum.
//!
//! The running XOR of every input byte. Used by protocols that define a plain
//! XOR (longitudinal parity) check byte.

use traits::ChecksumAlgorithm;

/// XOR checksum: zero base, `register ^= byte`, no final transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Xor;

impl Xor {
  /// Create the XOR checksum.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl ChecksumAlgorithm for Xor {
  #[inline]
  fn accumulate(&self, register: &mut u32, byte: u8) {
    *register ^= u32::from(byte);
  }

  #[inline]
  fn width(&self) -> u32 {
    8
  }
}
