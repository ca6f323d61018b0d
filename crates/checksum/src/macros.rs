//! Internal macros for CRC engine generation.
//!
//! The three register widths share the same parameter set, fluent
//! configuration surface, and trait plumbing; only the per-byte step, the
//! final transform, and the stored polynomial form differ. Each width module
//! supplies those as `const fn`s and invokes [`define_crc_engine!`].

/// Generate a CRC engine type with its configuration surface and trait impls.
///
/// This macro creates:
/// - The struct definition holding the five CRC parameters
/// - `new()` / `with()` constructors and `with_*` const builders
/// - `set_*` chainable setters returning `&mut Self`
/// - Parameter accessors and `params()`
/// - `compute()` / `table()` const helpers
/// - `ChecksumAlgorithm` and `CrcEngine` implementations
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16`)
/// - `$width`: Register width in bits
/// - `$t`: Parameter integer type (`u8`, `u16`, `u32`)
/// - `$store`: Maps a configured polynomial to its stored form. Must be an
///   involution, since the accessor applies it again to recover the input.
///
/// The invoking module must define these inherent `const fn`s on `$name`:
/// - `step(&self, register: u32, byte: u8) -> u32`
/// - `finish(&self, register: u32) -> u32`
/// - `table_entry(&self, index: u8) -> u32`
/// - `table_step(&self, register: u32, byte: u8, table: &[u32; 256]) -> u32`
macro_rules! define_crc_engine {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      width: $width:expr,
      value: $t:ty,
      store_polynomial: $store:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    $vis struct $name {
      polynomial: $t,
      base: $t,
      final_xor: $t,
      input_reflected: bool,
      output_reflected: bool,
    }

    impl $name {
      /// Register width in bits.
      pub const WIDTH: u32 = $width;

      /// Create an engine with the given polynomial, zero base, zero final
      /// XOR, and no reflection.
      #[inline]
      #[must_use]
      pub const fn new(polynomial: $t) -> Self {
        Self::with(polynomial, 0, 0, false, false)
      }

      /// Create an engine from all five parameters.
      #[inline]
      #[must_use]
      pub const fn with(
        polynomial: $t,
        base: $t,
        final_xor: $t,
        input_reflected: bool,
        output_reflected: bool,
      ) -> Self {
        Self {
          polynomial: $store(polynomial),
          base,
          final_xor,
          input_reflected,
          output_reflected,
        }
      }

      #[inline]
      #[must_use]
      pub const fn with_polynomial(self, polynomial: $t) -> Self {
        Self {
          polynomial: $store(polynomial),
          ..self
        }
      }

      #[inline]
      #[must_use]
      pub const fn with_base(self, base: $t) -> Self {
        Self { base, ..self }
      }

      #[inline]
      #[must_use]
      pub const fn with_final_xor(self, final_xor: $t) -> Self {
        Self { final_xor, ..self }
      }

      #[inline]
      #[must_use]
      pub const fn with_input_reflected(self, input_reflected: bool) -> Self {
        Self {
          input_reflected,
          ..self
        }
      }

      #[inline]
      #[must_use]
      pub const fn with_output_reflected(self, output_reflected: bool) -> Self {
        Self {
          output_reflected,
          ..self
        }
      }

      #[inline]
      pub fn set_polynomial(&mut self, polynomial: $t) -> &mut Self {
        self.polynomial = $store(polynomial);
        self
      }

      /// Set the initial register value.
      #[inline]
      pub fn set_base_value(&mut self, base: $t) -> &mut Self {
        self.base = base;
        self
      }

      #[inline]
      pub fn set_final_xor(&mut self, final_xor: $t) -> &mut Self {
        self.final_xor = final_xor;
        self
      }

      #[inline]
      pub fn set_input_reflected(&mut self, input_reflected: bool) -> &mut Self {
        self.input_reflected = input_reflected;
        self
      }

      #[inline]
      pub fn set_output_reflected(&mut self, output_reflected: bool) -> &mut Self {
        self.output_reflected = output_reflected;
        self
      }

      /// The polynomial as configured.
      #[inline]
      #[must_use]
      pub const fn polynomial(&self) -> $t {
        $store(self.polynomial)
      }

      #[inline]
      #[must_use]
      pub const fn base(&self) -> $t {
        self.base
      }

      #[inline]
      #[must_use]
      pub const fn final_xor(&self) -> $t {
        self.final_xor
      }

      #[inline]
      #[must_use]
      pub const fn input_reflected(&self) -> bool {
        self.input_reflected
      }

      #[inline]
      #[must_use]
      pub const fn output_reflected(&self) -> bool {
        self.output_reflected
      }

      /// The engine's parameters in runtime form.
      #[inline]
      #[must_use]
      pub const fn params(&self) -> $crate::params::CrcParams {
        $crate::params::CrcParams {
          width: $width,
          polynomial: self.polynomial() as u32,
          base: self.base as u32,
          final_xor: self.final_xor as u32,
          input_reflected: self.input_reflected,
          output_reflected: self.output_reflected,
        }
      }

      /// Compute the digest of `data` in one pass.
      ///
      /// Usable in const context, so check values can be verified at compile
      /// time.
      #[must_use]
      pub const fn compute(&self, mut data: &[u8]) -> u32 {
        let mut register = self.base as u32;
        while let [byte, rest @ ..] = data {
          register = self.step(register, *byte);
          data = rest;
        }
        self.finish(register)
      }

      /// Build the 256-entry lookup table for this engine's polynomial.
      // Loop index is bounded by the table length.
      #[allow(clippy::indexing_slicing)]
      #[must_use]
      pub const fn table(&self) -> [u32; 256] {
        let mut table = [0u32; 256];
        let mut i = 0usize;
        while i < 256 {
          table[i] = self.table_entry(i as u8);
          i += 1;
        }
        table
      }
    }

    impl ::traits::ChecksumAlgorithm for $name {
      #[inline]
      fn set_base(&self, register: &mut u32) {
        *register = self.base as u32;
      }

      #[inline]
      fn accumulate(&self, register: &mut u32, byte: u8) {
        *register = self.step(*register, byte);
      }

      #[inline]
      fn set_final(&self, register: &mut u32) {
        *register = self.finish(*register);
      }

      #[inline]
      fn width(&self) -> u32 {
        $width
      }
    }

    impl $crate::table::sealed::Sealed for $name {}

    impl $crate::table::CrcEngine for $name {
      #[inline]
      fn build_table(&self) -> [u32; 256] {
        self.table()
      }

      #[inline]
      fn table_step(&self, register: u32, byte: u8, table: &[u32; 256]) -> u32 {
        $name::table_step(self, register, byte, table)
      }
    }
  };
}
