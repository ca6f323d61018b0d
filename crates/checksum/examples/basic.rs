//! Basic checksum usage: presets, custom engines, and word input.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Checksum, Crc16, Crc32, Tabled, presets};

fn main() {
  println!("=== Checksum Basic Examples ===\n");

  preset_examples();
  custom_examples();
  word_examples();
}

/// The four ready-made variants.
fn preset_examples() {
  println!("--- Presets ---\n");

  let data = b"123456789";

  let xor = Checksum::new(&presets::XOR).calculate(data);
  println!("XOR:             0x{xor:02X}");
  assert_eq!(xor, 0x31);

  let crc8 = Checksum::new(&presets::CRC8).calculate(data);
  println!("CRC-8 (0x07):    0x{crc8:02X}");
  assert_eq!(crc8, 0xF4);

  let crc16 = Checksum::new(&presets::CRC16).calculate(data);
  println!("CRC-16 (0x8005): 0x{crc16:04X}");
  assert_eq!(crc16, 0xFEE8);

  let crc32 = Checksum::new(&presets::CRC32).calculate(data);
  println!("CRC-32 (IEEE):   0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  println!();
}

/// Engines configured field by field.
fn custom_examples() {
  println!("--- Custom Engines ---\n");

  let data = b"123456789";

  // CRC-16/MODBUS
  let mut modbus = Crc16::new(0x8005);
  modbus
    .set_base_value(0xFFFF)
    .set_input_reflected(true)
    .set_output_reflected(true);
  let crc = Checksum::new(&modbus).calculate(data);
  println!("CRC-16/MODBUS:   0x{crc:04X}");
  assert_eq!(crc, 0x4B37);

  // CRC-32C (Castagnoli), built in a const context
  const CRC32C: Crc32 = Crc32::new(0x1EDC_6F41)
    .with_base(0xFFFF_FFFF)
    .with_final_xor(0xFFFF_FFFF)
    .with_input_reflected(true)
    .with_output_reflected(true);
  let crc = Checksum::new(&CRC32C).calculate(data);
  println!("CRC-32C:         0x{crc:08X}");
  assert_eq!(crc, 0xE306_9283);

  // Same engine, one table lookup per byte
  let tabled = Tabled::new(CRC32C);
  assert_eq!(Checksum::new(&tabled).calculate(data), crc);
  println!("CRC-32C (table): 0x{crc:08X}");

  println!();
}

/// Scalars are fed as their little-endian bytes.
fn word_examples() {
  println!("--- Word Input ---\n");

  let crc32 = Checksum::new(&presets::CRC32);
  let words = [0x3433_3231u32, 0x3837_3635];
  let from_words = crc32.calculate_words(words);
  let from_bytes = crc32.calculate(b"12345678");
  println!("u32 words:       0x{from_words:08X}");
  println!("bytes:           0x{from_bytes:08X}");
  assert_eq!(from_words, from_bytes);

  let frame = b"\x02payload\x03";
  let body = crc32.calculate_range(frame, 1..8);
  assert_eq!(body, crc32.calculate(b"payload"));
  println!("frame body:      0x{body:08X}");

  println!();
}
