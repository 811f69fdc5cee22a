//! Constants for the SHA-256 hash function (FIPS 180-4)

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Size of one SHA-256 word in bytes
pub const SHA256_WORD_SIZE: usize = 4;

/// Number of 32-bit words in one message block
pub const SHA256_BLOCK_WORDS: usize = SHA256_BLOCK_SIZE / SHA256_WORD_SIZE;

/// Number of words in the message schedule, which is also the round count
pub const SHA256_SCHEDULE_WORDS: usize = 64;

/// Number of 32-bit words in the hash state
pub const SHA256_STATE_WORDS: usize = 8;

/// Size of the trailing message-length field in bytes
pub const SHA256_LENGTH_FIELD_SIZE: usize = 8;

/// Byte appended directly after the message: a single `1` bit then seven `0` bits
pub const SHA256_PAD_MARKER: u8 = 0x80;

/// Exclusive upper bound on the message length in bytes.
///
/// The bit length `8 * len` has to fit the 64-bit length field, so any
/// message of `2^61` bytes or more is rejected.
pub const SHA256_MESSAGE_LIMIT: u64 = 1 << 61;

/// Largest message length in bytes that can be hashed
pub const SHA256_MAX_MESSAGE_BYTES: u64 = SHA256_MESSAGE_LIMIT - 1;
