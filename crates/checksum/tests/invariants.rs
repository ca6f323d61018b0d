use std::thread;

use checksum::presets::{CRC8, CRC16, CRC32, XOR};
use checksum::{Algorithm, Checksum, ChecksumAlgorithm, Crc8, Crc16, Crc32, CrcParams, Tabled, config::KernelForce};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn crc32_reflected_bitwise(poly_reflected: u32, data: &[u8]) -> u32 {
  let mut crc = 0xffff_ffffu32;
  for &b in data {
    crc ^= b as u32;
    for _ in 0..8 {
      let mask = 0u32.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly_reflected & mask);
    }
  }
  crc ^ 0xffff_ffff
}

fn crc_normal_bitwise_u64(poly: u64, width: u8, init: u64, xor_out: u64, data: &[u8]) -> u64 {
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let top = 1u64 << (width as u32 - 1);
  let shift = width as u32 - 8;

  let mut crc = init & mask;
  for &b in data {
    crc ^= u64::from(b) << shift;
    for _ in 0..8 {
      if (crc & top) != 0 {
        crc = ((crc << 1) ^ poly) & mask;
      } else {
        crc = (crc << 1) & mask;
      }
    }
  }
  (crc ^ xor_out) & mask
}

const LENGTHS: [usize; 14] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 255, 1024];
const SEEDS: [u64; 4] = [0, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

fn empty_digest<A: ChecksumAlgorithm + ?Sized>(alg: &A) -> u32 {
  let mut reg = 0;
  alg.set_base(&mut reg);
  alg.set_final(&mut reg);
  reg
}

#[test]
fn presets_match_reference() {
  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);

      let crc8 = Checksum::new(&CRC8).calculate(&data);
      let reference = crc_normal_bitwise_u64(0x07, 8, 0, 0, &data) as u32;
      assert_eq!(crc8, reference, "crc8 reference mismatch at len={}", len);

      let crc16 = Checksum::new(&CRC16).calculate(&data);
      let reference = crc_normal_bitwise_u64(0x8005, 16, 0, 0, &data) as u32;
      assert_eq!(crc16, reference, "crc16 reference mismatch at len={}", len);

      let crc32 = Checksum::new(&CRC32).calculate(&data);
      let reference = crc32_reflected_bitwise(0xedb8_8320, &data);
      assert_eq!(crc32, reference, "crc32 reference mismatch at len={}", len);

      let xor = Checksum::new(&XOR).calculate(&data);
      let reference = data.iter().fold(0u8, |acc, &b| acc ^ b) as u32;
      assert_eq!(xor, reference, "xor reference mismatch at len={}", len);
    }
  }
}

#[test]
fn deterministic() {
  let algs: [&dyn ChecksumAlgorithm; 4] = [&XOR, &CRC8, &CRC16, &CRC32];
  for &len in &LENGTHS {
    let data = gen_bytes(len, 0x5d58_39a7_3d87_1ceb ^ len as u64);
    for alg in algs {
      let driver = Checksum::new(alg);
      assert_eq!(driver.calculate(&data), driver.calculate(&data), "len={}", len);
    }
  }
}

#[test]
fn empty_input_is_base_then_final() {
  let algs: [&dyn ChecksumAlgorithm; 4] = [&XOR, &CRC8, &CRC16, &CRC32];
  for alg in algs {
    let driver = Checksum::new(alg);
    let expected = empty_digest(alg);
    assert_eq!(driver.calculate(&[]), expected);
    assert_eq!(driver.calculate_range(b"abc", 1..1), expected);
    assert_eq!(driver.calculate_len(b"abc", 0), expected);
    assert_eq!(driver.calculate_words(core::iter::empty::<u64>()), expected);
  }

  // Non-trivial base/final transforms.
  let crc16 = Crc16::with(0x1021, 0x1D0F, 0xFFFF, false, true);
  assert_eq!(Checksum::new(&crc16).calculate(&[]), (0x1D0Fu16.reverse_bits() ^ 0xFFFF) as u32);
  let crc32 = Crc32::with(0x04C1_1DB7, 0x1234_5678, 0, false, false);
  assert_eq!(Checksum::new(&crc32).calculate(&[]), 0x1234_5678u32.reverse_bits());
}

#[test]
fn standard_check_values() {
  assert_eq!(Checksum::new(&CRC32).calculate(b"123456789"), 0xCBF4_3926);
  assert_eq!(Checksum::new(&CRC16).calculate(b"123456789"), 0xFEE8);
  assert_eq!(Checksum::new(&CRC8).calculate(b"123456789"), 0xF4);
  assert_eq!(Checksum::new(&CRC8).calculate(&[0x00]), 0x00);
}

#[test]
fn xor_vectors() {
  let xor = Checksum::new(&XOR);
  assert_eq!(xor.calculate(&[0x0F, 0xF0]), 0xFF);
  assert_eq!(xor.calculate(&[0xAA, 0xAA]), 0x00);
}

#[test]
fn crc16_single_bytes_match_crc_crate() {
  let reference = crc::Crc::<u16>::new(&crc::CRC_16_UMTS);
  for b in 0..=u8::MAX {
    assert_eq!(
      Checksum::new(&CRC16).calculate(&[b]),
      u32::from(reference.checksum(&[b])),
      "byte 0x{b:02X}"
    );
  }
}

#[test]
fn digests_fit_width() {
  let algs: [&dyn ChecksumAlgorithm; 4] = [&XOR, &CRC8, &CRC16, &CRC32];
  for &len in &LENGTHS {
    let data = gen_bytes(len, 0x9e37_79b9 ^ len as u64);
    for alg in algs {
      let digest = Checksum::new(alg).calculate(&data);
      let width = alg.width();
      if width < 32 {
        assert_eq!(digest >> width, 0, "width={} len={}", width, len);
      }
    }
  }
}

#[test]
fn crc32_setters_equal_preset() {
  let mut configured = Crc32::new(0);
  configured
    .set_polynomial(0x04C1_1DB7)
    .set_base_value(0xFFFF_FFFF)
    .set_final_xor(0xFFFF_FFFF)
    .set_input_reflected(true)
    .set_output_reflected(true);
  assert_eq!(configured, CRC32);

  for &len in &LENGTHS {
    for &seed in &SEEDS {
      let data = gen_bytes(len, seed ^ len as u64);
      assert_eq!(
        Checksum::new(&configured).calculate(&data),
        Checksum::new(&CRC32).calculate(&data),
        "crc32 setter mismatch at len={}",
        len
      );
    }
  }
}

fn crc8_from(alg: &crc::Algorithm<u8>) -> Crc8 {
  Crc8::with(alg.poly, alg.init, alg.xorout, alg.refin, alg.refout)
}

fn crc16_from(alg: &crc::Algorithm<u16>) -> Crc16 {
  Crc16::with(alg.poly, alg.init, alg.xorout, alg.refin, alg.refout)
}

// The 32-bit engine loads `base` into its reflected register unchanged, so
// only catalog entries with a bit-symmetric init map directly.
fn crc32_from(alg: &crc::Algorithm<u32>) -> Crc32 {
  Crc32::with(alg.poly, alg.init, alg.xorout, alg.refin, alg.refout)
}

#[test]
fn crc8_catalog() {
  for alg in [
    &crc::CRC_8_SMBUS,
    &crc::CRC_8_MAXIM_DOW,
    &crc::CRC_8_ROHC,
    &crc::CRC_8_DARC,
    &crc::CRC_8_AUTOSAR,
    &crc::CRC_8_I_432_1,
  ] {
    let engine = crc8_from(alg);
    assert_eq!(engine.compute(b"123456789"), u32::from(alg.check), "{engine:?}");

    let reference = crc::Crc::<u8>::new(alg);
    let data = gen_bytes(300, u64::from(alg.poly));
    assert_eq!(Checksum::new(&engine).calculate(&data), u32::from(reference.checksum(&data)));
  }
}

#[test]
fn crc16_catalog() {
  for alg in [
    &crc::CRC_16_UMTS,
    &crc::CRC_16_ARC,
    &crc::CRC_16_MODBUS,
    &crc::CRC_16_XMODEM,
    &crc::CRC_16_IBM_3740,
    &crc::CRC_16_GENIBUS,
    &crc::CRC_16_KERMIT,
    &crc::CRC_16_MCRF4XX,
    &crc::CRC_16_RIELLO,
  ] {
    let engine = crc16_from(alg);
    assert_eq!(engine.compute(b"123456789"), u32::from(alg.check), "{engine:?}");

    let reference = crc::Crc::<u16>::new(alg);
    let data = gen_bytes(300, u64::from(alg.poly));
    assert_eq!(Checksum::new(&engine).calculate(&data), u32::from(reference.checksum(&data)));
  }
}

#[test]
fn crc32_catalog() {
  for alg in [
    &crc::CRC_32_ISO_HDLC,
    &crc::CRC_32_ISCSI,
    &crc::CRC_32_JAMCRC,
    &crc::CRC_32_BZIP2,
    &crc::CRC_32_MPEG_2,
    &crc::CRC_32_CKSUM,
  ] {
    let engine = crc32_from(alg);
    assert_eq!(engine.compute(b"123456789"), alg.check, "{engine:?}");

    let reference = crc::Crc::<u32>::new(alg);
    let data = gen_bytes(300, u64::from(alg.poly));
    assert_eq!(Checksum::new(&engine).calculate(&data), reference.checksum(&data));
  }
}

#[test]
fn words_equal_le_bytes() {
  let words: Vec<u64> = (0..37u64).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).collect();
  let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
  let algs: [&dyn ChecksumAlgorithm; 4] = [&XOR, &CRC8, &CRC16, &CRC32];
  for alg in algs {
    let driver = Checksum::new(alg);
    assert_eq!(driver.calculate_words(words.iter().copied()), driver.calculate(&bytes));
  }
}

#[test]
fn tabled_matches_bitwise() {
  for &len in &LENGTHS {
    let data = gen_bytes(len, 0x2545_f491_4f6c_dd1d ^ len as u64);
    assert_eq!(
      Checksum::new(&Tabled::new(CRC8)).calculate(&data),
      Checksum::new(&CRC8).calculate(&data)
    );
    assert_eq!(
      Checksum::new(&Tabled::new(CRC16)).calculate(&data),
      Checksum::new(&CRC16).calculate(&data)
    );
    assert_eq!(
      Checksum::new(&Tabled::new(CRC32)).calculate(&data),
      Checksum::new(&CRC32).calculate(&data)
    );
  }
}

#[test]
fn runtime_algorithm_matches_presets() {
  let data = gen_bytes(4096, 0xdead_beef);
  for force in [KernelForce::Auto, KernelForce::Bitwise, KernelForce::Table] {
    for (params, expected) in [
      (CrcParams::CRC8, Checksum::new(&CRC8).calculate(&data)),
      (CrcParams::CRC16, Checksum::new(&CRC16).calculate(&data)),
      (CrcParams::CRC32, Checksum::new(&CRC32).calculate(&data)),
    ] {
      let alg = Algorithm::with_force(params, force).unwrap();
      assert_eq!(Checksum::new(&alg).calculate(&data), expected, "{}", alg.kernel_name());
    }
  }
}

#[test]
fn shared_preset_across_threads() {
  let inputs: Vec<Vec<u8>> = (0..8).map(|i| gen_bytes(1024 + i * 97, i as u64)).collect();
  let sequential: Vec<[u32; 4]> = inputs
    .iter()
    .map(|data| {
      [
        Checksum::new(&XOR).calculate(data),
        Checksum::new(&CRC8).calculate(data),
        Checksum::new(&CRC16).calculate(data),
        Checksum::new(&CRC32).calculate(data),
      ]
    })
    .collect();

  let shared = Algorithm::from(CRC32);
  let tabled = Tabled::new(CRC16);
  let parallel: Vec<[u32; 4]> = thread::scope(|s| {
    let handles: Vec<_> = inputs
      .iter()
      .map(|data| {
        let shared = &shared;
        let tabled = &tabled;
        s.spawn(move || {
          let mut out = [0u32; 4];
          for _ in 0..16 {
            out = [
              Checksum::new(&XOR).calculate(data),
              Checksum::new(&CRC8).calculate(data),
              Checksum::new(tabled).calculate(data),
              Checksum::new(shared).calculate(data),
            ];
          }
          out
        })
      })
      .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
  });

  assert_eq!(parallel, sequential);
}
