//! Message padding
//!
//! Builds `message || 0x80 || 0x00.. || bit_len (u64, big-endian)` in a
//! freshly allocated buffer whose length is a multiple of 64 bytes.

use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};
use sha256_fips_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_LENGTH_FIELD_SIZE, SHA256_MAX_MESSAGE_BYTES, SHA256_PAD_MARKER,
};
use zeroize::Zeroizing;

use super::plan::PaddingPlan;
use crate::error::{Error, Result};

/// A padded message, ready to be split into blocks.
///
/// Holds a copy of the caller's message, so the buffer is wiped on drop.
pub struct PaddedMessage {
    buffer: Zeroizing<Vec<u8>>,
}

impl PaddedMessage {
    /// Padded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Padded length in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false: even the empty message pads to one block
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of 64-byte blocks
    pub fn block_count(&self) -> usize {
        self.buffer.len() / SHA256_BLOCK_SIZE
    }

    /// Value of the trailing 64-bit length field
    pub fn length_field(&self) -> u64 {
        BigEndian::read_u64(&self.buffer[self.buffer.len() - SHA256_LENGTH_FIELD_SIZE..])
    }
}

/// Largest message length whose padded form fits in `capacity` bytes.
fn max_message_for_capacity(capacity: u64) -> u64 {
    let block = SHA256_BLOCK_SIZE as u64;
    // Marker byte plus the length field is the minimum padding.
    let min_padding = 1 + SHA256_LENGTH_FIELD_SIZE as u64;

    (capacity / block * block)
        .saturating_sub(min_padding)
        .min(SHA256_MAX_MESSAGE_BYTES)
}

/// Pad `message` according to `plan`.
///
/// `plan` must come from [`super::plan::plan`] for this message's length.
/// The only failure is running out of memory for the padded buffer.
pub fn pad(message: &[u8], plan: &PaddingPlan) -> Result<PaddedMessage> {
    debug_assert_eq!(message.len() as u64, plan.message_len);

    let padded_len = usize::try_from(plan.padded_len).map_err(|_| Error::InputTooLarge {
        algorithm: "SHA-256",
        length: plan.message_len,
        max: max_message_for_capacity(usize::MAX as u64),
    })?;

    let mut buffer = Zeroizing::new(Vec::new());
    buffer
        .try_reserve_exact(padded_len)
        .map_err(|_| Error::Allocation {
            context: "SHA-256 padded buffer",
        })?;

    buffer.extend_from_slice(message);
    buffer.push(SHA256_PAD_MARKER);
    // Zero fill up to the length field; zero bytes when the marker and the
    // length field are adjacent (message length 55 mod 64).
    buffer.resize(padded_len - SHA256_LENGTH_FIELD_SIZE, 0);

    let mut length_field = [0u8; SHA256_LENGTH_FIELD_SIZE];
    BigEndian::write_u64(&mut length_field, plan.bit_len);
    buffer.extend_from_slice(&length_field);

    debug_assert_eq!(buffer.len(), padded_len);

    Ok(PaddedMessage { buffer })
}
