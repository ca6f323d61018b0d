//! Arbitrary CRC parameters: validation must never panic, and both runtime
//! kernels must agree whenever the parameters are accepted.

#![no_main]

use arbitrary::Arbitrary;
use checksum::config::KernelForce;
use checksum::{Algorithm, Checksum, CrcParams, ParamsError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
  width: u8,
  polynomial: u32,
  base: u32,
  final_xor: u32,
  input_reflected: bool,
  output_reflected: bool,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  let params = CrcParams {
    width: input.width,
    polynomial: input.polynomial,
    base: input.base,
    final_xor: input.final_xor,
    input_reflected: input.input_reflected,
    output_reflected: input.output_reflected,
  };

  let bitwise = Algorithm::with_force(params, KernelForce::Bitwise);
  let table = Algorithm::with_force(params, KernelForce::Table);

  match (bitwise, table) {
    (Ok(bitwise), Ok(table)) => {
      assert_eq!(bitwise.params(), Some(params));
      let a = Checksum::new(&bitwise).calculate(input.data);
      let b = Checksum::new(&table).calculate(input.data);
      assert_eq!(a, b, "kernel mismatch for {:?}", params);
      if params.width < 32 {
        assert_eq!(a >> params.width, 0, "digest exceeds width for {:?}", params);
      }
    }
    (Err(e1), Err(e2)) => {
      assert_eq!(e1, e2);
      if let ParamsError::UnsupportedWidth(w) = e1 {
        assert!(!matches!(w, 8 | 16 | 32));
      }
    }
    (a, b) => panic!("kernels disagree on validation: {:?} vs {:?}", a.err(), b.err()),
  }
});
