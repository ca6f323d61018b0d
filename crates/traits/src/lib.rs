//! Core traits for the checksum workspace.
//!
//! This crate provides the contract every checksum variant implements. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`ChecksumAlgorithm`] | Base / accumulate / final protocol over a `u32` register | XOR, CRC-8, CRC-16, CRC-32 |
//!
//! # Error Types
//!
//! - [`ParamsError`] - Runtime CRC parameters that do not describe a supported engine
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
pub mod error;

pub use checksum::ChecksumAlgorithm;
pub use error::ParamsError;
