//! Kernel selection configuration (overrides + effective choice).
//!
//! Runtime-built CRC variants ([`Algorithm::from_params`](crate::Algorithm::from_params))
//! pick between the bitwise engine and the table-driven kernel. The choice can
//! be forced with the `CHECKSUM_FORCE` environment variable (read once, `std`
//! only):
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` | Default selection (table kernel) |
//! | `bitwise`, `reference` | Bitwise shift-register engine |
//! | `table`, `lookup` | Table-driven kernel |
//!
//! Unrecognized or empty values are ignored.

/// Forced kernel selection for runtime-built CRC variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum KernelForce {
  /// Use the default selector.
  #[default]
  Auto,
  /// Force the bitwise engine (table-free, obviously correct).
  Bitwise,
  /// Force the table-driven kernel.
  Table,
}

impl KernelForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }

  /// Parse a force mode name, case-insensitively.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") {
      return Some(Self::Bitwise);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("lookup") {
      return Some(Self::Table);
    }
    None
  }

  /// Resolve `Auto` to the concrete kernel it selects.
  #[must_use]
  pub const fn resolve(self) -> Self {
    match self {
      Self::Auto | Self::Table => Self::Table,
      Self::Bitwise => Self::Bitwise,
    }
  }
}

/// Kernel configuration after applying overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: KernelForce,
  /// The concrete kernel the request resolves to; never `Auto`.
  pub effective_force: KernelForce,
}

impl KernelConfig {
  /// Build a config from a requested force mode.
  #[must_use]
  pub const fn from_force(requested_force: KernelForce) -> Self {
    Self {
      requested_force,
      effective_force: requested_force.resolve(),
    }
  }
}

impl Default for KernelConfig {
  fn default() -> Self {
    Self::from_force(KernelForce::Auto)
  }
}

#[cfg(feature = "std")]
fn read_env_force() -> KernelForce {
  std::env::var("CHECKSUM_FORCE")
    .ok()
    .and_then(|value| KernelForce::parse(&value))
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested_force() -> KernelForce {
  use std::sync::OnceLock;
  static FORCE: OnceLock<KernelForce> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> KernelForce {
  KernelForce::Auto
}

/// The active kernel configuration.
#[must_use]
pub fn get() -> KernelConfig {
  KernelConfig::from_force(requested_force())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_aliases() {
    assert_eq!(KernelForce::parse("auto"), Some(KernelForce::Auto));
    assert_eq!(KernelForce::parse(" Bitwise "), Some(KernelForce::Bitwise));
    assert_eq!(KernelForce::parse("REFERENCE"), Some(KernelForce::Bitwise));
    assert_eq!(KernelForce::parse("table"), Some(KernelForce::Table));
    assert_eq!(KernelForce::parse("Lookup"), Some(KernelForce::Table));
    assert_eq!(KernelForce::parse(""), None);
    assert_eq!(KernelForce::parse("simd"), None);
  }

  #[test]
  fn as_str_round_trips() {
    for force in [KernelForce::Auto, KernelForce::Bitwise, KernelForce::Table] {
      assert_eq!(KernelForce::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn auto_resolves_to_table() {
    let config = KernelConfig::default();
    assert_eq!(config.requested_force, KernelForce::Auto);
    assert_eq!(config.effective_force, KernelForce::Table);
  }

  #[test]
  fn effective_is_never_auto() {
    for force in [KernelForce::Auto, KernelForce::Bitwise, KernelForce::Table] {
      assert_ne!(KernelConfig::from_force(force).effective_force, KernelForce::Auto);
    }
  }

  #[test]
  fn get_is_stable() {
    assert_eq!(get(), get());
  }
}
