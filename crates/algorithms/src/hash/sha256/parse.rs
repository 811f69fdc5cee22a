//! Message block parsing

use core::iter::FusedIterator;
use core::slice::ChunksExact;

use byteorder::{BigEndian, ByteOrder};
use sha256_fips_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_BLOCK_WORDS, SHA256_WORD_SIZE};
use zeroize::Zeroize;

use super::pad::PaddedMessage;

/// One 512-bit block viewed as sixteen big-endian 32-bit words
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct MessageBlock {
    /// Block words in order, word `j` taken from bytes `4j..4j+4`
    pub words: [u32; SHA256_BLOCK_WORDS],
}

impl MessageBlock {
    /// Read a block from 64 bytes, most significant byte first within each word
    pub fn from_bytes(bytes: &[u8; SHA256_BLOCK_SIZE]) -> Self {
        let mut words = [0u32; SHA256_BLOCK_WORDS];
        BigEndian::read_u32_into(bytes, &mut words);
        Self { words }
    }

    /// Word `j` of the block
    #[inline]
    pub fn word(&self, j: usize) -> u32 {
        self.words[j]
    }
}

/// Iterator over the blocks of a padded message, in order
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for Blocks<'_> {
    type Item = MessageBlock;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|chunk| {
            let mut words = [0u32; SHA256_BLOCK_WORDS];
            for (j, word) in words.iter_mut().enumerate() {
                *word = BigEndian::read_u32(&chunk[j * SHA256_WORD_SIZE..]);
            }
            MessageBlock { words }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}

/// Split a padded message into its `len / 64` blocks.
pub fn blocks(padded: &PaddedMessage) -> Blocks<'_> {
    let bytes = padded.as_bytes();
    debug_assert_eq!(bytes.len() % SHA256_BLOCK_SIZE, 0);

    Blocks {
        chunks: bytes.chunks_exact(SHA256_BLOCK_SIZE),
    }
}
