//! Random number support.
//!
//! Everything here is deterministic given a seed string: the same seed
//! always produces the same puzzle, which is what the tests and the UI's
//! shareable puzzles rely on.  We deliberately build `rand` without an OS
//! entropy source; unseeded JS calls derive a seed from the host instead.

pub use rand::Rng;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

/// The concrete generator we use everywhere.
pub type Random = Pcg64;

/// Makes a new generator seeded from the given string.
pub fn new_random(seed: &str) -> Random {
  Seeder::from(seed).into_rng()
}

/// Makes a new generator from the given seed, or from host entropy when the
/// caller didn't supply one.
pub fn seeded_or_entropy(seed: Option<String>) -> Random {
  match seed {
    Some(seed) => new_random(&seed),
    None => new_random(&entropy_seed()),
  }
}

/// Derives a seed string from the JS host's clock and `Math.random`.
/// Only callable under wasm.
fn entropy_seed() -> String {
  format!("{}#{}", js_sys::Date::now(), js_sys::Math::random())
}
