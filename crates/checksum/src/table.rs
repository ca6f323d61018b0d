//! Table-driven kernel for the CRC engines.
//!
//! [`Tabled`] pairs an engine with a 256-entry lookup table holding the
//! register contribution of every possible byte, so each input byte costs one
//! lookup instead of eight shift rounds. The table is built once when the
//! value is constructed and never changes afterwards, so a `Tabled` engine is
//! shared across threads exactly like the plain engine.
//!
//! | Kernel | Work per byte | Memory |
//! |--------|---------------|--------|
//! | Bitwise (engine) | 8 shift rounds | 0 bytes |
//! | [`Tabled`] | 1 lookup | 1 KiB |
//!
//! Digests are bit-identical to the bitwise engine for every input, including
//! the inverted reflection sense of [`Crc32`](crate::Crc32).

use core::fmt;

use traits::ChecksumAlgorithm;

pub(crate) mod sealed {
  pub trait Sealed {}
}

/// A CRC engine that can drive a lookup table.
///
/// Sealed: implemented by [`Crc8`](crate::Crc8), [`Crc16`](crate::Crc16), and
/// [`Crc32`](crate::Crc32).
pub trait CrcEngine: ChecksumAlgorithm + sealed::Sealed + Copy {
  /// Build this engine's 256-entry table.
  #[must_use]
  fn build_table(&self) -> [u32; 256];

  /// Fold one byte into `register` using `table`.
  ///
  /// `table` must come from [`build_table`](Self::build_table) on an engine
  /// with the same polynomial.
  #[must_use]
  fn table_step(&self, register: u32, byte: u8, table: &[u32; 256]) -> u32;
}

/// A CRC engine accelerated by a precomputed lookup table.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Tabled, presets};
///
/// let fast = Tabled::new(presets::CRC32);
/// let digest = Checksum::new(&fast).calculate(b"123456789");
/// assert_eq!(digest, 0xCBF4_3926);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Tabled<E> {
  engine: E,
  table: [u32; 256],
}

impl<E: CrcEngine> Tabled<E> {
  /// Build the lookup table for `engine`.
  #[must_use]
  pub fn new(engine: E) -> Self {
    let table = engine.build_table();
    Self { engine, table }
  }

  /// The wrapped engine.
  #[inline]
  #[must_use]
  pub const fn engine(&self) -> &E {
    &self.engine
  }

  /// The precomputed table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u32; 256] {
    &self.table
  }
}

impl<E: CrcEngine> ChecksumAlgorithm for Tabled<E> {
  #[inline]
  fn set_base(&self, register: &mut u32) {
    self.engine.set_base(register);
  }

  #[inline]
  fn accumulate(&self, register: &mut u32, byte: u8) {
    *register = self.engine.table_step(*register, byte, &self.table);
  }

  #[inline]
  fn set_final(&self, register: &mut u32) {
    self.engine.set_final(register);
  }

  #[inline]
  fn width(&self) -> u32 {
    self.engine.width()
  }
}

impl<E: fmt::Debug> fmt::Debug for Tabled<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Tabled")
      .field("engine", &self.engine)
      .finish_non_exhaustive()
  }
}
