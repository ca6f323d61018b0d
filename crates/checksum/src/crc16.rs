//! CRC-16 engine (MSB-first shift register).
//!
//! Same scheme as the CRC-8 engine, with the input byte XORed into the top
//! byte of a 16-bit register. Output reflection swaps the two register bytes
//! and bit-reverses each, which reflects the full 16-bit value.

use crate::bits::{reflect16, reverse_byte, width_mask};

const fn store(polynomial: u16) -> u16 {
  polynomial
}

define_crc_engine! {
  /// CRC-16 engine with configurable polynomial, base, final XOR, and
  /// reflection.
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::Crc16;
  ///
  /// // CRC-16/XMODEM
  /// assert_eq!(Crc16::new(0x1021).compute(b"123456789"), 0x31C3);
  ///
  /// // CRC-16/ARC
  /// let arc = Crc16::with(0x8005, 0, 0, true, true);
  /// assert_eq!(arc.compute(b"123456789"), 0xBB3D);
  /// ```
  pub struct Crc16 {
    width: 16,
    value: u16,
    store_polynomial: store,
  }
}

const MASK: u32 = width_mask(16);

impl Crc16 {
  #[inline]
  const fn input(&self, byte: u8) -> u32 {
    (if self.input_reflected { reverse_byte(byte) } else { byte }) as u32
  }

  /// Run eight shift-register rounds over `register`.
  #[inline]
  const fn shift8(&self, mut register: u32) -> u32 {
    let polynomial = self.polynomial as u32;
    let mut bit = 0;
    while bit < 8 {
      register = (if register & 0x8000 != 0 {
        (register << 1) ^ polynomial
      } else {
        register << 1
      }) & MASK;
      bit += 1;
    }
    register
  }

  #[inline]
  const fn step(&self, register: u32, byte: u8) -> u32 {
    self.shift8(register ^ (self.input(byte) << 8))
  }

  #[inline]
  const fn finish(&self, mut register: u32) -> u32 {
    if self.output_reflected {
      register = reflect16(register);
    }
    (register ^ self.final_xor as u32) & MASK
  }

  #[inline]
  const fn table_entry(&self, index: u8) -> u32 {
    self.shift8((index as u32) << 8)
  }

  // A `u8` index is always within the table.
  #[allow(clippy::indexing_slicing)]
  #[inline]
  const fn table_step(&self, register: u32, byte: u8, table: &[u32; 256]) -> u32 {
    let index = ((register >> 8) ^ self.input(byte)) as u8;
    ((register << 8) ^ table[index as usize]) & MASK
  }
}
