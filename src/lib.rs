//! # sha256-fips
//!
//! A pure Rust reference implementation of the SHA-256 message digest
//! (NIST FIPS PUB 180-4).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sha256-fips = "0.1"
//! ```
//!
//! ```
//! let digest = sha256_fips::sha256(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` implementations
//! - `serde`: serialize digests as lowercase hex strings
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`sha256-fips-api`]: Error type and the `HashAlgorithm` trait
//! - [`sha256-fips-params`]: Block, word and length-limit constants
//! - [`sha256-fips-algorithms`]: Padding, parsing, compression and the `Digest` type

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use sha256_fips_algorithms as algorithms;
pub use sha256_fips_api as api;
pub use sha256_fips_params as params;

pub use api::{Error, Result};
pub use algorithms::Digest;

use params::SHA256_OUTPUT_SIZE;

/// Compute the SHA-256 digest of `message`.
///
/// Fails with [`Error::InputTooLarge`] for messages of `2^61` bytes or more.
pub fn sha256(message: &[u8]) -> Result<Digest<SHA256_OUTPUT_SIZE>> {
    algorithms::error::to_core_result(algorithms::sha256(message), "SHA-256")
}

/// Compute the SHA-256 digest of `message` into `out`.
///
/// On error `out` is not written.
pub fn sha256_into(message: &[u8], out: &mut [u8; SHA256_OUTPUT_SIZE]) -> Result<()> {
    algorithms::error::to_core_result(algorithms::sha256_into(message, out), "SHA-256")
}

/// Common imports for sha256-fips users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::HashAlgorithm;
    pub use crate::algorithms::{ConstantTimeEq, HashFunction};

    // Re-export hash types
    pub use crate::algorithms::{Digest, Sha256, Sha256Algorithm};
}
