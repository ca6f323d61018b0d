//! Ready-made checksum variants.
//!
//! | Preset | Polynomial | Base | Final XOR | Reflected | Check (`"123456789"`) |
//! |--------|------------|------|-----------|-----------|-----------------------|
//! | [`XOR`] | - | 0 | - | - | `0x31` |
//! | [`CRC8`] | 0x07 | 0x00 | 0x00 | no | `0xF4` |
//! | [`CRC16`] | 0x8005 | 0x0000 | 0x0000 | no | `0xFEE8` |
//! | [`CRC32`] | 0x04C11DB7 | 0xFFFFFFFF | 0xFFFFFFFF | in + out | `0xCBF43926` |
//!
//! All presets are `const` values, usable in const context and shareable
//! across threads without synchronization.

use crate::{Crc8, Crc16, Crc32, Xor};

/// Byte-wise XOR checksum.
pub const XOR: Xor = Xor::new();

/// CRC-8 with polynomial 0x07 (CRC-8/SMBUS).
pub const CRC8: Crc8 = Crc8::new(0x07);

/// CRC-16 with polynomial 0x8005, no reflection (CRC-16/UMTS).
pub const CRC16: Crc16 = Crc16::new(0x8005);

/// The conventional CRC-32 (CRC-32/ISO-HDLC): Ethernet, gzip, zip, PNG.
pub const CRC32: Crc32 = Crc32::new(0x04C11DB7)
  .with_base(0xFFFFFFFF)
  .with_final_xor(0xFFFFFFFF)
  .with_input_reflected(true)
  .with_output_reflected(true);

/// Standard test input for CRC check values.
pub(crate) const CHECK_INPUT: &[u8] = b"123456789";

// Verified at compile time; a wrong engine fails the build.
const _: () = assert!(CRC8.compute(CHECK_INPUT) == 0xF4);
const _: () = assert!(CRC16.compute(CHECK_INPUT) == 0xFEE8);
const _: () = assert!(CRC32.compute(CHECK_INPUT) == 0xCBF4_3926);
