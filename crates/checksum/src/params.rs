//! CRC algorithm parameters.
//!
//! [`CrcParams`] is the runtime form of an engine's configuration, used to
//! pick an engine and kernel when the width is only known at runtime (see
//! [`Algorithm::from_params`](crate::Algorithm::from_params)).
//!
//! # Reflection
//!
//! The flags carry this crate's engine semantics, which differ between widths:
//! the 32-bit engine treats them with inverted sense (see [`crate::crc32`]).
//! For 8/16-bit parameters and for the standard CRC-32 they coincide with the
//! usual catalog `refin`/`refout` flags.

use traits::ParamsError;

use crate::bits::width_mask;

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Register width in bits (8, 16, or 32)
/// - `polynomial`: The generator polynomial, MSB-first, without the implicit high bit
/// - `base`: Initial value for the CRC register
/// - `final_xor`: Value XORed into the register after the output transform
/// - `input_reflected`: Input reflection flag
/// - `output_reflected`: Output reflection flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits (8, 16, or 32).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u32,
  /// Initial value for the CRC register.
  pub base: u32,
  /// XOR value applied to the final CRC.
  pub final_xor: u32,
  /// Input reflection flag.
  pub input_reflected: bool,
  /// Output reflection flag.
  pub output_reflected: bool,
}

impl CrcParams {
  /// CRC-8 preset (CRC-8/SMBUS): polynomial 0x07, no reflection.
  pub const CRC8: Self = Self {
    width: 8,
    polynomial: 0x07,
    base: 0x00,
    final_xor: 0x00,
    input_reflected: false,
    output_reflected: false,
  };

  /// CRC-16 preset (CRC-16/UMTS): polynomial 0x8005, no reflection.
  pub const CRC16: Self = Self {
    width: 16,
    polynomial: 0x8005,
    base: 0x0000,
    final_xor: 0x0000,
    input_reflected: false,
    output_reflected: false,
  };

  /// CRC-32 preset (CRC-32/ISO-HDLC) - Ethernet, gzip, zip, PNG
  pub const CRC32: Self = Self {
    width: 32,
    polynomial: 0x04C11DB7,
    base: 0xFFFFFFFF,
    final_xor: 0xFFFFFFFF,
    input_reflected: true,
    output_reflected: true,
  };

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton
  pub const CRC8_MAXIM: Self = Self {
    width: 8,
    polynomial: 0x31,
    base: 0x00,
    final_xor: 0x00,
    input_reflected: true,
    output_reflected: true,
  };

  /// CRC-16/ARC - legacy IBM protocols, LHA
  pub const CRC16_ARC: Self = Self {
    width: 16,
    polynomial: 0x8005,
    base: 0x0000,
    final_xor: 0x0000,
    input_reflected: true,
    output_reflected: true,
  };

  /// Check that the parameters describe a supported engine.
  ///
  /// # Errors
  ///
  /// - [`ParamsError::UnsupportedWidth`] unless `width` is 8, 16, or 32
  /// - [`ParamsError::PolynomialOutOfRange`] if the polynomial has bits above `width`
  /// - [`ParamsError::ValueOutOfRange`] if `base` or `final_xor` has bits above `width`
  pub const fn validate(&self) -> Result<(), ParamsError> {
    let width = self.width;
    if !matches!(width, 8 | 16 | 32) {
      return Err(ParamsError::UnsupportedWidth(width));
    }

    let mask = width_mask(width as u32);
    if self.polynomial & !mask != 0 {
      return Err(ParamsError::PolynomialOutOfRange {
        width,
        polynomial: self.polynomial,
      });
    }
    if self.base & !mask != 0 {
      return Err(ParamsError::ValueOutOfRange { width, value: self.base });
    }
    if self.final_xor & !mask != 0 {
      return Err(ParamsError::ValueOutOfRange {
        width,
        value: self.final_xor,
      });
    }
    Ok(())
  }
}
