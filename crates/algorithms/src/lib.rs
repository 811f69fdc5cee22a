//! SHA-256 primitives with careful memory handling
//!
//! This crate implements the SHA-256 message digest of FIPS PUB 180-4 as a
//! pipeline of small, separately testable stages: size planning, padding,
//! block parsing and compression. It is usable in both `std` and `no_std`
//! environments (an allocator is required for the padded buffer).
//!
//! # Security Features
//!
//! - Padded buffers, message schedules and hash state are zeroized after use
//! - Digest verification uses constant-time comparison
//! - Oversized inputs are rejected with an exact integer bound check
//!
//! ```
//! use sha256_fips_algorithms::hash::{HashFunction, Sha256};
//!
//! let digest = Sha256::digest(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::sha256::{sha256, sha256_into};
pub use hash::{HashAlgorithm, HashFunction, Sha256, Sha256Algorithm};

// Type system
pub mod types;
pub use types::{ByteSerializable, ConstantTimeEq, Digest, FixedSize};
