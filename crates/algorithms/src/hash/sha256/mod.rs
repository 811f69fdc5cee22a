//! SHA-256 hash function (FIPS PUB 180-4)
//!
//! The digest is computed as a strict pipeline over a complete in-memory
//! message:
//!
//! 1. [`plan`] sizes the padding and rejects messages of `2^61` bytes or more
//! 2. [`pad`] builds the padded buffer
//! 3. [`parse`] splits it into 512-bit blocks of sixteen big-endian words
//! 4. [`compress`] folds the blocks into the hash state and serializes it
//!
//! Every call owns its own buffer, schedule and state, so concurrent calls
//! on different messages need no coordination.

use sha256_fips_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

pub mod compress;
pub mod pad;
pub mod parse;
pub mod plan;

pub use compress::HashState;
pub use pad::PaddedMessage;
pub use parse::MessageBlock;
pub use plan::PaddingPlan;

/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// SHA-256 hash function
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl HashFunction for Sha256 {
    type Algorithm = Sha256Algorithm;
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn digest(data: &[u8]) -> Result<Self::Output> {
        sha256(data)
    }
}

/// Compute the SHA-256 digest of `message`.
pub fn sha256(message: &[u8]) -> Result<Digest<SHA256_OUTPUT_SIZE>> {
    let state = hash_state(message)?;
    Ok(Digest::new(state.to_bytes()))
}

/// Compute the SHA-256 digest of `message` into a caller-provided buffer.
///
/// `out` is left untouched when an error is returned.
pub fn sha256_into(message: &[u8], out: &mut [u8; SHA256_OUTPUT_SIZE]) -> Result<()> {
    let state = hash_state(message)?;
    *out = state.to_bytes();
    Ok(())
}

fn hash_state(message: &[u8]) -> Result<HashState> {
    let plan = plan::plan(message.len() as u64).map_err(|err| {
        if let Error::InputTooLarge { length, max, .. } = &err {
            debug!(length, max, "sha256: message exceeds the 64-bit length field");
        }
        err
    })?;

    let padded = pad::pad(message, &plan)?;
    trace!(
        message_len = plan.message_len,
        padded_len = plan.padded_len,
        blocks = plan.block_count(),
        "sha256: padded message"
    );

    Ok(compress::compress_blocks(parse::blocks(&padded)))
}
