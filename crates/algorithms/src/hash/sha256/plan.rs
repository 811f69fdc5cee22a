//! Padding size planning
//!
//! Works out how long the padded message will be before anything is
//! allocated, and rejects messages whose bit length cannot be encoded.

use sha256_fips_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_LENGTH_FIELD_SIZE, SHA256_MESSAGE_LIMIT,
};

use crate::error::{validate, Result};

/// Block size in bits
const BLOCK_BITS: u64 = (SHA256_BLOCK_SIZE * 8) as u64;

/// Bit offset inside the final block where the length field starts
const LENGTH_FIELD_OFFSET_BITS: u64 = BLOCK_BITS - (SHA256_LENGTH_FIELD_SIZE * 8) as u64;

/// Padding layout for a message of a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingPlan {
    /// Original message length in bytes
    pub message_len: u64,
    /// Original message length in bits, the value stored in the length field
    pub bit_len: u64,
    /// Number of `0` bits between the mandatory `1` bit and the length field
    pub zero_bits: u64,
    /// Total padded length in bytes, always a multiple of the block size
    pub padded_len: u64,
}

impl PaddingPlan {
    /// Number of 512-bit blocks in the padded message
    pub fn block_count(&self) -> u64 {
        self.padded_len / SHA256_BLOCK_SIZE as u64
    }

    /// Whole zero bytes written after the `0x80` marker byte.
    ///
    /// The marker byte already carries seven of the zero bits.
    pub fn zero_bytes(&self) -> u64 {
        (self.zero_bits - 7) / 8
    }
}

/// Plan the padding for a message of `message_len` bytes.
///
/// Fails with `InputTooLarge` when `message_len >= 2^61`, since the bit
/// length would no longer fit the 64-bit length field.
pub fn plan(message_len: u64) -> Result<PaddingPlan> {
    validate::message_length("SHA-256", message_len, SHA256_MESSAGE_LIMIT)?;

    let bit_len = message_len * 8;
    let r = bit_len % BLOCK_BITS;
    // (448 - (r + 1)) mod 512, kept non-negative
    let zero_bits = (LENGTH_FIELD_OFFSET_BITS + BLOCK_BITS - (r + 1)) % BLOCK_BITS;

    // bit_len + 1 + zero_bits + 64 is a multiple of 512, but the sum in bits
    // overflows u64 near the limit, so add the padding in bytes instead.
    let padding_bytes = (1 + zero_bits + (SHA256_LENGTH_FIELD_SIZE * 8) as u64) / 8;
    let padded_len = message_len + padding_bytes;

    debug_assert_eq!(padded_len % SHA256_BLOCK_SIZE as u64, 0);

    Ok(PaddingPlan {
        message_len,
        bit_len,
        zero_bits,
        padded_len,
    })
}
