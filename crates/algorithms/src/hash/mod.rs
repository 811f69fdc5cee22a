//! Cryptographic hash functions
//!
//! The hash functions here are one-shot: the whole message is handed over
//! as a single slice and the digest comes back in one call.

use crate::error::Result;
use crate::types::ConstantTimeEq;

pub use sha256_fips_api::HashAlgorithm;

pub mod sha256;

pub use sha256::{Sha256, Sha256Algorithm};

/// Common interface for one-shot hash functions
pub trait HashFunction {
    /// Marker type carrying the algorithm's fixed parameters
    type Algorithm: HashAlgorithm;

    /// Digest type produced by this hash function
    type Output: AsRef<[u8]> + ConstantTimeEq;

    /// Hash `data` and return its digest
    fn digest(data: &[u8]) -> Result<Self::Output>;

    /// Hash `data` and compare the result with `expected` in constant time
    fn verify(data: &[u8], expected: &Self::Output) -> Result<bool> {
        let computed = Self::digest(data)?;
        Ok(computed.ct_eq(expected))
    }

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
