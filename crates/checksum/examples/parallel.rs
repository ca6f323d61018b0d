//! Sharing one algorithm across threads.
//!
//! Algorithms are immutable after configuration and every computation uses
//! its own register, so a single preset (or table) can serve many threads
//! without locking.
//!
//! Run with: `cargo run --example parallel -p checksum`

use std::thread;

use checksum::{Algorithm, Checksum, CrcParams, presets};

fn main() {
  println!("=== Parallel Checksum Examples ===\n");

  shared_preset();
  shared_runtime_algorithm();
}

/// Many threads, one `static` preset.
fn shared_preset() {
  println!("--- Shared Preset ---\n");

  let messages: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 4096]).collect();
  let sequential: Vec<u32> = messages
    .iter()
    .map(|m| Checksum::new(&presets::CRC32).calculate(m))
    .collect();

  let parallel: Vec<u32> = thread::scope(|s| {
    let handles: Vec<_> = messages
      .iter()
      .map(|m| s.spawn(move || Checksum::new(&presets::CRC32).calculate(m)))
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  for (i, crc) in parallel.iter().enumerate() {
    println!("message {i}: 0x{crc:08X}");
  }
  assert_eq!(parallel, sequential);

  println!();
}

/// Many threads, one runtime-built variant (table built once).
fn shared_runtime_algorithm() {
  println!("--- Shared Runtime Algorithm ---\n");

  let alg = Algorithm::from_params(CrcParams::CRC16_ARC).unwrap();
  println!("kernel: {}", alg.kernel_name());

  let data = b"123456789";
  let digests: Vec<u32> = thread::scope(|s| {
    let handles: Vec<_> = (0..4).map(|_| s.spawn(|| Checksum::new(&alg).calculate(data))).collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  for crc in &digests {
    assert_eq!(*crc, 0xBB3D);
  }
  println!("CRC-16/ARC from {} threads: 0x{:04X}", digests.len(), digests[0]);

  println!();
}
