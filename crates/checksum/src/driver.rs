//! The checksum driver.
//!
//! [`Checksum`] runs the base / accumulate / final protocol of any
//! [`ChecksumAlgorithm`] over bytes or over a sequence of wider scalars. It
//! owns nothing but a shared reference to the algorithm; every call works on
//! its own stack register, so one driver (or one algorithm) may be used from
//! many threads at once.

use core::ops::Range;

use traits::ChecksumAlgorithm;

/// A fixed-width scalar that can be fed to [`Checksum::calculate_words`].
///
/// Bytes are produced least significant first, i.e. in little-endian order.
pub trait Word: Copy {
  /// Size of the scalar in bytes.
  const BYTES: usize;

  /// Byte `n` of the value, byte 0 being the least significant.
  ///
  /// `n` must be below [`BYTES`](Self::BYTES); higher indices yield 0.
  #[must_use]
  fn byte(self, n: usize) -> u8;
}

macro_rules! impl_word {
  ($($t:ty),* $(,)?) => {
    $(
      impl Word for $t {
        const BYTES: usize = core::mem::size_of::<$t>();

        #[inline]
        fn byte(self, n: usize) -> u8 {
          self.to_le_bytes().get(n).copied().unwrap_or(0)
        }
      }
    )*
  };
}

impl_word!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Drives a [`ChecksumAlgorithm`] over input data.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, presets};
///
/// let crc32 = Checksum::new(&presets::CRC32);
/// assert_eq!(crc32.calculate(b"123456789"), 0xCBF4_3926);
///
/// // Wider scalars are fed as their little-endian bytes.
/// let words = [0x3433_3231u32, 0x3837_3635];
/// assert_eq!(crc32.calculate_words(words), crc32.calculate(b"12345678"));
/// ```
#[derive(Debug)]
pub struct Checksum<'a, A: ?Sized> {
  algorithm: &'a A,
}

impl<A: ?Sized> Clone for Checksum<'_, A> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<A: ?Sized> Copy for Checksum<'_, A> {}

impl<'a, A: ChecksumAlgorithm + ?Sized> Checksum<'a, A> {
  /// Create a driver for `algorithm`.
  #[inline]
  #[must_use]
  pub const fn new(algorithm: &'a A) -> Self {
    Self { algorithm }
  }

  /// The algorithm this driver runs.
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> &'a A {
    self.algorithm
  }

  /// Checksum a contiguous run of bytes.
  #[must_use]
  pub fn calculate(&self, data: &[u8]) -> u32 {
    let alg = self.algorithm;
    let mut register = 0;

    alg.set_base(&mut register);
    for &byte in data {
      alg.accumulate(&mut register, byte);
    }
    alg.set_final(&mut register);

    register
  }

  /// Checksum the bytes of `data` within `range`.
  ///
  /// # Panics
  ///
  /// Panics if `range.start > range.end` or `range.end > data.len()`.
  #[must_use]
  pub fn calculate_range(&self, data: &[u8], range: Range<usize>) -> u32 {
    assert!(
      range.start <= range.end && range.end <= data.len(),
      "checksum range {}..{} invalid for input of length {}",
      range.start,
      range.end,
      data.len()
    );
    self.calculate(data.get(range).unwrap_or_default())
  }

  /// Checksum the first `len` bytes of `data`.
  ///
  /// # Panics
  ///
  /// Panics if `len > data.len()`.
  #[must_use]
  pub fn calculate_len(&self, data: &[u8], len: usize) -> u32 {
    self.calculate_range(data, 0..len)
  }

  /// Checksum a sequence of scalars.
  ///
  /// Each element is split into its bytes, least significant first, and fed
  /// through [`ChecksumAlgorithm::accumulate_at`] with a position counter that
  /// starts at zero and runs across all elements.
  #[must_use]
  pub fn calculate_words<I>(&self, words: I) -> u32
  where
    I: IntoIterator,
    I::Item: Word,
  {
    let alg = self.algorithm;
    let mut register = 0;
    let mut position = 0usize;

    alg.set_base(&mut register);
    for word in words {
      for n in 0..I::Item::BYTES {
        alg.accumulate_at(&mut register, word.byte(n), position);
        position = position.wrapping_add(1);
      }
    }
    alg.set_final(&mut register);

    register
  }
}
