//! Species seed and cyclic selection
//!
//! Every species-dependent choice in a protocol is driven by a single seed
//! folded from the normalized species name. The fold is the classic
//! `h = h * 31 + unit` rolling hash over UTF-16 code units, truncated to a
//! signed 32-bit accumulator after every step, so seeds match the ones the
//! browser form has always produced.

use serde::Serialize;
use std::fmt;

/// Deterministic, non-negative seed derived from a species name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SpeciesSeed(u32);

impl SpeciesSeed {
    /// Seed for `species`, normalized first
    pub fn from_species(species: &str) -> Self {
        Self::from_normalized(&normalize_species_name(species))
    }

    /// Seed for an already normalized name
    pub fn from_normalized(normalized: &str) -> Self {
        let folded = normalized
            .encode_utf16()
            .fold(0i32, |hash, unit| {
                hash.wrapping_mul(31).wrapping_add(i32::from(unit))
            });
        // i32::MIN has no positive i32 counterpart; unsigned_abs keeps it as 2^31
        Self(folded.unsigned_abs())
    }

    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// `seed mod modulus`, the building block of every numeric derivation
    pub const fn modulo(self, modulus: u32) -> u32 {
        self.0 % modulus
    }

    /// Short identifying key, `PT-<seed mod 10000>`
    pub fn fingerprint_key(self) -> String {
        format!("PT-{}", self.0 % 10_000)
    }
}

impl fmt::Display for SpeciesSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trim, lowercase and collapse internal whitespace runs to single spaces
pub fn normalize_species_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pick `options[(seed + offset) mod len]`.
///
/// Distinct offsets per parameter category keep the choices for one species
/// from lining up with each other while staying reproducible.
///
/// # Panics
///
/// Panics when `options` is empty.
pub fn pick_by_seed<T>(options: &[T], seed: SpeciesSeed, offset: u32) -> &T {
    assert!(!options.is_empty(), "pick_by_seed called with an empty option list");
    let index = (u64::from(seed.value()) + u64::from(offset)) % options.len() as u64;
    &options[index as usize]
}
