//! The checksum algorithm contract.
//!
//! Every checksum variant is described by four operations over a caller-owned
//! `u32` register:
//!
//! - **base**: load the starting register value
//! - **accumulate**: fold one byte into the register
//! - **accumulate at**: same, with the byte's position in the input
//! - **final**: apply the output transform and mask to the active width
//!
//! Variants hold no mutable state, so a single instance can be shared by any
//! number of concurrent computations.

/// A checksum variant driven through the base / accumulate / final protocol.
///
/// Only [`accumulate`](Self::accumulate) is required. The defaults give a
/// zero base, a position-agnostic [`accumulate_at`](Self::accumulate_at), and
/// a no-op final step, which is exactly a running XOR-style checksum.
///
/// # Usage
///
/// ```rust
/// use traits::ChecksumAlgorithm;
///
/// struct Sum8;
///
/// impl ChecksumAlgorithm for Sum8 {
///   fn accumulate(&self, register: &mut u32, byte: u8) {
///     *register = register.wrapping_add(u32::from(byte));
///   }
///
///   fn set_final(&self, register: &mut u32) {
///     *register &= 0xFF;
///   }
///
///   fn width(&self) -> u32 {
///     8
///   }
/// }
///
/// let mut reg = 0;
/// Sum8.set_base(&mut reg);
/// for &b in b"abc" {
///   Sum8.accumulate(&mut reg, b);
/// }
/// Sum8.set_final(&mut reg);
/// assert_eq!(reg, (0x61 + 0x62 + 0x63) & 0xFF);
/// ```
///
/// # Implementor Requirements
///
/// - All methods must be total: no panics for any register or byte value.
/// - Bits of the register above [`width`](Self::width) may hold garbage
///   between steps; [`set_final`](Self::set_final) must clear them.
/// - Implementations must not use interior mutability.
pub trait ChecksumAlgorithm {
  /// Initialize the register to the variant's starting value.
  #[inline]
  fn set_base(&self, register: &mut u32) {
    *register = 0;
  }

  /// Fold one byte into the register.
  fn accumulate(&self, register: &mut u32, byte: u8);

  /// Fold one byte into the register, given its position in the input.
  ///
  /// `position` counts bytes from the start of the computation. Variants that
  /// do not depend on position keep the default, which ignores it.
  #[inline]
  fn accumulate_at(&self, register: &mut u32, byte: u8, position: usize) {
    let _ = position;
    self.accumulate(register, byte);
  }

  /// Apply the output transform to the register.
  #[inline]
  fn set_final(&self, register: &mut u32) {
    let _ = register;
  }

  /// Width of the finalized digest in bits.
  #[inline]
  fn width(&self) -> u32 {
    32
  }
}

impl<A: ChecksumAlgorithm + ?Sized> ChecksumAlgorithm for &A {
  #[inline]
  fn set_base(&self, register: &mut u32) {
    (**self).set_base(register);
  }

  #[inline]
  fn accumulate(&self, register: &mut u32, byte: u8) {
    (**self).accumulate(register, byte);
  }

  #[inline]
  fn accumulate_at(&self, register: &mut u32, byte: u8, position: usize) {
    (**self).accumulate_at(register, byte, position);
  }

  #[inline]
  fn set_final(&self, register: &mut u32) {
    (**self).set_final(register);
  }

  #[inline]
  fn width(&self) -> u32 {
    (**self).width()
  }
}
