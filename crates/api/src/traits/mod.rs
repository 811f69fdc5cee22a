//! Trait definitions shared across the sha256-fips crates

pub mod hash;

pub use hash::HashAlgorithm;
