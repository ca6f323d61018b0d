//! Error types for checksum parameter validation.
//!
//! Computing a checksum never fails. The only fallible surface is building a
//! variant from runtime parameters, where the width or a value may not fit.

use core::fmt;

/// CRC parameters that cannot describe a supported engine.
///
/// # Examples
///
/// ```
/// use traits::ParamsError;
///
/// fn check_width(width: u8) -> Result<(), ParamsError> {
///   match width {
///     8 | 16 | 32 => Ok(()),
///     other => Err(ParamsError::UnsupportedWidth(other)),
///   }
/// }
///
/// assert!(check_width(16).is_ok());
/// assert_eq!(check_width(24), Err(ParamsError::UnsupportedWidth(24)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamsError {
  /// The register width is not one of 8, 16, or 32 bits.
  UnsupportedWidth(u8),
  /// The polynomial has bits set above the register width.
  PolynomialOutOfRange {
    /// Register width in bits.
    width: u8,
    /// Offending polynomial.
    polynomial: u32,
  },
  /// The base or final XOR value has bits set above the register width.
  ValueOutOfRange {
    /// Register width in bits.
    width: u8,
    /// Offending value.
    value: u32,
  },
}

impl fmt::Display for ParamsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth(width) => write!(f, "unsupported crc width: {width} bits"),
      Self::PolynomialOutOfRange { width, polynomial } => {
        write!(f, "polynomial 0x{polynomial:X} does not fit in {width} bits")
      }
      Self::ValueOutOfRange { width, value } => {
        write!(f, "value 0x{value:X} does not fit in {width} bits")
      }
    }
  }
}

impl core::error::Error for ParamsError {}
