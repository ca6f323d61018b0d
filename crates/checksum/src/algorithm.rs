//! Runtime-selected checksum variant.
//!
//! [`Algorithm`] is the closed set of every variant this crate implements,
//! dispatched by `match`. Use it when the variant is chosen at runtime (from
//! a config file, a protocol header, ...); use the concrete types directly
//! when it is known at compile time.

use traits::{ChecksumAlgorithm, ParamsError};

use crate::config::{self, KernelForce};
use crate::params::CrcParams;
use crate::{Crc8, Crc16, Crc32, Tabled, Xor};

/// Any checksum variant, with its kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
  Xor(Xor),
  Crc8(Crc8),
  Crc16(Crc16),
  Crc32(Crc32),
  Crc8Table(Tabled<Crc8>),
  Crc16Table(Tabled<Crc16>),
  Crc32Table(Tabled<Crc32>),
}

impl Algorithm {
  /// Build a CRC variant from runtime parameters.
  ///
  /// The kernel follows [`config::get`]: the table kernel unless the bitwise
  /// engine is forced.
  ///
  /// # Errors
  ///
  /// Returns the [`ParamsError`] from [`CrcParams::validate`].
  pub fn from_params(params: CrcParams) -> Result<Self, ParamsError> {
    Self::with_force(params, config::get().effective_force)
  }

  /// Build a CRC variant from runtime parameters with an explicit kernel.
  ///
  /// # Errors
  ///
  /// Returns the [`ParamsError`] from [`CrcParams::validate`].
  pub fn with_force(params: CrcParams, force: KernelForce) -> Result<Self, ParamsError> {
    params.validate()?;
    let table = force.resolve() == KernelForce::Table;

    // Values were range-checked by `validate`, so the narrowing casts are exact.
    let alg = match params.width {
      8 => {
        let engine = Crc8::with(
          params.polynomial as u8,
          params.base as u8,
          params.final_xor as u8,
          params.input_reflected,
          params.output_reflected,
        );
        if table { Self::Crc8Table(Tabled::new(engine)) } else { Self::Crc8(engine) }
      }
      16 => {
        let engine = Crc16::with(
          params.polynomial as u16,
          params.base as u16,
          params.final_xor as u16,
          params.input_reflected,
          params.output_reflected,
        );
        if table { Self::Crc16Table(Tabled::new(engine)) } else { Self::Crc16(engine) }
      }
      32 => {
        let engine = Crc32::with(
          params.polynomial,
          params.base,
          params.final_xor,
          params.input_reflected,
          params.output_reflected,
        );
        if table { Self::Crc32Table(Tabled::new(engine)) } else { Self::Crc32(engine) }
      }
      other => return Err(ParamsError::UnsupportedWidth(other)),
    };
    Ok(alg)
  }

  /// The CRC parameters of this variant, or `None` for XOR.
  #[must_use]
  pub const fn params(&self) -> Option<CrcParams> {
    match self {
      Self::Xor(_) => None,
      Self::Crc8(e) => Some(e.params()),
      Self::Crc16(e) => Some(e.params()),
      Self::Crc32(e) => Some(e.params()),
      Self::Crc8Table(t) => Some(t.engine().params()),
      Self::Crc16Table(t) => Some(t.engine().params()),
      Self::Crc32Table(t) => Some(t.engine().params()),
    }
  }

  /// Name of the variant and kernel, for diagnostics.
  #[must_use]
  pub const fn kernel_name(&self) -> &'static str {
    match self {
      Self::Xor(_) => "xor",
      Self::Crc8(_) => "crc8/bitwise",
      Self::Crc16(_) => "crc16/bitwise",
      Self::Crc32(_) => "crc32/bitwise",
      Self::Crc8Table(_) => "crc8/table",
      Self::Crc16Table(_) => "crc16/table",
      Self::Crc32Table(_) => "crc32/table",
    }
  }
}

impl TryFrom<CrcParams> for Algorithm {
  type Error = ParamsError;

  fn try_from(params: CrcParams) -> Result<Self, Self::Error> {
    Self::from_params(params)
  }
}

impl From<Xor> for Algorithm {
  fn from(alg: Xor) -> Self {
    Self::Xor(alg)
  }
}

impl From<Crc8> for Algorithm {
  fn from(alg: Crc8) -> Self {
    Self::Crc8(alg)
  }
}

impl From<Crc16> for Algorithm {
  fn from(alg: Crc16) -> Self {
    Self::Crc16(alg)
  }
}

impl From<Crc32> for Algorithm {
  fn from(alg: Crc32) -> Self {
    Self::Crc32(alg)
  }
}

macro_rules! dispatch {
  ($self:expr, $alg:ident => $body:expr) => {
    match $self {
      Algorithm::Xor($alg) => $body,
      Algorithm::Crc8($alg) => $body,
      Algorithm::Crc16($alg) => $body,
      Algorithm::Crc32($alg) => $body,
      Algorithm::Crc8Table($alg) => $body,
      Algorithm::Crc16Table($alg) => $body,
      Algorithm::Crc32Table($alg) => $body,
    }
  };
}

impl ChecksumAlgorithm for Algorithm {
  #[inline]
  fn set_base(&self, register: &mut u32) {
    dispatch!(self, alg => alg.set_base(register))
  }

  #[inline]
  fn accumulate(&self, register: &mut u32, byte: u8) {
    dispatch!(self, alg => alg.accumulate(register, byte))
  }

  #[inline]
  fn accumulate_at(&self, register: &mut u32, byte: u8, position: usize) {
    dispatch!(self, alg => alg.accumulate_at(register, byte, position))
  }

  #[inline]
  fn set_final(&self, register: &mut u32) {
    dispatch!(self, alg => alg.set_final(register))
  }

  #[inline]
  fn width(&self) -> u32 {
    dispatch!(self, alg => alg.width())
  }
}
