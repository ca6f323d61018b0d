//! CRC-8 engine (MSB-first shift register).
//!
//! Each input byte is XORed into the 8-bit register and shifted out one bit
//! at a time: when the top bit is set the register is shifted and XORed with
//! the polynomial. Input reflection bit-reverses the byte before it enters
//! the register; output reflection bit-reverses the finalized register.

use crate::bits::{reverse_byte, width_mask};

const fn store(polynomial: u8) -> u8 {
  polynomial
}

define_crc_engine! {
  /// CRC-8 engine with configurable polynomial, base, final XOR, and
  /// reflection.
  ///
  /// # Example
  ///
  /// ```
  /// use checksum::Crc8;
  ///
  /// // CRC-8/SMBUS
  /// let crc = Crc8::new(0x07);
  /// assert_eq!(crc.compute(b"123456789"), 0xF4);
  ///
  /// // CRC-8/MAXIM-DOW
  /// let maxim = Crc8::new(0x31).with_input_reflected(true).with_output_reflected(true);
  /// assert_eq!(maxim.compute(b"123456789"), 0xA1);
  /// ```
  pub struct Crc8 {
    width: 8,
    value: u8,
    store_polynomial: store,
  }
}

const MASK: u32 = width_mask(8);

impl Crc8 {
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
      register = (if register & 0x80 != 0 {
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
    self.shift8(register ^ self.input(byte))
  }

  #[inline]
  const fn finish(&self, mut register: u32) -> u32 {
    if self.output_reflected {
      register = reverse_byte(register as u8) as u32;
    }
    (register ^ self.final_xor as u32) & MASK
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
    table[index as usize]
  }
}
