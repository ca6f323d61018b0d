//! Cross-kernel equivalence fuzzing.
//!
//! Every preset is run through the bitwise engine, the table-driven kernel,
//! and the word path; all three must agree. The bitwise engine is the oracle.

#![no_main]

use checksum::presets::{CRC8, CRC16, CRC32, XOR};
use checksum::{Checksum, ChecksumAlgorithm, CrcEngine, Tabled};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  check_engine("crc8", CRC8, data);
  check_engine("crc16", CRC16, data);
  check_engine("crc32", CRC32, data);
  check_words("xor", &XOR, data);
});

fn check_engine<E: CrcEngine>(name: &str, engine: E, data: &[u8]) {
  let expected = Checksum::new(&engine).calculate(data);
  let tabled = Checksum::new(&Tabled::new(engine)).calculate(data);
  assert_eq!(
    tabled,
    expected,
    "{} table mismatch: table=0x{:08X} bitwise=0x{:08X}, len={}",
    name,
    tabled,
    expected,
    data.len()
  );

  check_words(name, &engine, data);
}

fn check_words<A: ChecksumAlgorithm + ?Sized>(name: &str, alg: &A, data: &[u8]) {
  let driver = Checksum::new(alg);
  let expected = driver.calculate(data);
  assert_eq!(
    driver.calculate_words(data.iter().copied()),
    expected,
    "{} byte-word mismatch, len={}",
    name,
    data.len()
  );

  if data.len() % 4 == 0 {
    let words = data.chunks_exact(4).map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]));
    assert_eq!(driver.calculate_words(words), expected, "{} u32-word mismatch, len={}", name, data.len());
  }

  let split = data.len() / 2;
  assert_eq!(driver.calculate_len(data, split), driver.calculate(&data[..split]));
}
