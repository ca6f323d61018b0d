//! Bit-serial CRC and XOR checksums behind one generic driver.
//!
//! Every variant implements [`ChecksumAlgorithm`], a three-phase protocol over
//! a caller-owned `u32` register (base, accumulate per byte, final). The
//! [`Checksum`] driver runs that protocol over bytes or wider scalars without
//! knowing which variant it drives.
//!
//! # Supported Algorithms
//!
//! | Type | Register | Update | Presets |
//! |------|----------|--------|---------|
//! | [`Xor`] | 8-bit | `reg ^= byte` | [`presets::XOR`] |
//! | [`Crc8`] | 8-bit | MSB-first shift | [`presets::CRC8`] (poly 0x07) |
//! | [`Crc16`] | 16-bit | MSB-first shift | [`presets::CRC16`] (poly 0x8005) |
//! | [`Crc32`] | 32-bit | reflected, LSB-first shift | [`presets::CRC32`] (poly 0x04C11DB7) |
//!
//! Any CRC engine can be wrapped in [`Tabled`] for one table lookup per byte
//! instead of eight shift rounds, with bit-identical results.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc16, presets};
//!
//! // Presets
//! let data = b"123456789";
//! assert_eq!(Checksum::new(&presets::CRC32).calculate(data), 0xCBF4_3926);
//! assert_eq!(Checksum::new(&presets::XOR).calculate(&[0x0F, 0xF0]), 0xFF);
//!
//! // Custom engines, configured fluently
//! let mut modbus = Crc16::new(0x8005);
//! modbus.set_base_value(0xFFFF).set_input_reflected(true).set_output_reflected(true);
//! assert_eq!(Checksum::new(&modbus).calculate(data), 0x4B37);
//!
//! // Scalars are fed as their little-endian bytes
//! let crc = Checksum::new(&presets::CRC16);
//! assert_eq!(crc.calculate_words([0x3231u16]), crc.calculate(b"12"));
//! ```
//!
//! # Runtime selection
//!
//! ```rust
//! use checksum::{Algorithm, Checksum, CrcParams};
//!
//! let alg = Algorithm::from_params(CrcParams::CRC16_ARC)?;
//! assert_eq!(Checksum::new(&alg).calculate(b"123456789"), 0xBB3D);
//! # Ok::<(), checksum::ParamsError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod algorithm;
pub mod bits;
pub mod config;
pub mod crc16;
pub mod crc32;
pub mod crc8;
mod driver;
pub mod params;
pub mod presets;
pub mod table;
mod xor;

pub use algorithm::Algorithm;
pub use crc8::Crc8;
pub use crc16::Crc16;
pub use crc32::Crc32;
pub use driver::{Checksum, Word};
pub use params::CrcParams;
pub use table::{CrcEngine, Tabled};
// Re-export traits for convenience
pub use traits::{ChecksumAlgorithm, ParamsError};
pub use xor::Xor;
