//! CRC-32 engine (reflected, LSB-first shift register).
//!
//! Unlike the 8/16-bit engines this one keeps the register in reflected form
//! and shifts right, XORing with the bit-reversed polynomial whenever a 1 is
//! shifted out. The polynomial is reversed once when it is set.
//!
//! # Reflection sense
//!
//! Because the register itself is reflected, the reflection flags work the
//! other way around from the 8/16-bit engines:
//!
//! | Flag | `true` | `false` |
//! |------|--------|---------|
//! | `input_reflected` | byte fed as-is | byte bit-reversed first |
//! | `output_reflected` | register emitted as-is | register fully reflected |
//!
//! With both flags set this is the conventional CRC-32 (`0xCBF43926` check
//! value); with both clear it computes the MSB-first CRC-32 family (MPEG-2,
//! BZIP2, CKSUM) from the same loop.
//!
//! # Algorithm
//!
//! ```text
//! for each bit:
//!   mask = 0 - (crc & 1)    // 0x00000000 or 0xFFFFFFFF
//!   crc = (crc >> 1) ^ (POLYNOMIAL & mask)
//! ```

use crate::bits::{reflect32, reverse_byte};

const fn store(polynomial: u32) -> u32 {
  reflect32(polynomial)
}

define_crc_engine! {
  /// CRC-32 engine with configurable polynomial, base, final XOR, and
  /// reflection.
  ///
  /// See the [module docs](self) for the reflection flag semantics.
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::Crc32;
  ///
  /// // CRC-32/ISO-HDLC
  /// let crc = Crc32::with(0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);
  /// assert_eq!(crc.compute(b"123456789"), 0xCBF4_3926);
  ///
  /// // CRC-32/BZIP2
  /// let bzip2 = Crc32::new(0x04C1_1DB7).with_base(0xFFFF_FFFF).with_final_xor(0xFFFF_FFFF);
  /// assert_eq!(bzip2.compute(b"123456789"), 0xFC89_1918);
  /// ```
  pub struct Crc32 {
    width: 32,
    value: u32,
    store_polynomial: store,
  }
}

impl Crc32 {
  #[inline]
  const fn input(&self, byte: u8) -> u32 {
    (if self.input_reflected { byte } else { reverse_byte(byte) }) as u32
  }

  /// Run eight branchless right-shift rounds over `register`.
  #[inline]
  const fn shift8(&self, mut register: u32) -> u32 {
    let polynomial = self.polynomial;
    let mut bit = 0;
    while bit < 8 {
      let mask = 0u32.wrapping_sub(register & 1);
      register = (register >> 1) ^ (polynomial & mask);
      bit += 1;
    }
    register
  }

  #[inline]
  const fn step(&self, register: u32, byte: u8) -> u32 {
    self.shift8(register ^ self.input(byte))
  }

  #[inline]
  const fn finish(&self, mut register: u32) -> u32 {
    if !self.output_reflected {
      register = reflect32(register);
    }
    register ^ self.final_xor
  }

  #[inline]
  const fn table_entry(&self, index: u8) -> u32 {
    self.shift8(index as u32)
  }

  // A `u8` index is always within the table.
  #[allow(clippy::indexing_slicing)]
  #[inline]
  const fn table_step(&self, register: u32, byte: u8, table: &[u32; 256]) -> u32 {
    let index = (register ^ self.input(byte)) as u8;
    (register >> 8) ^ table[index as usize]
  }
}
