//! SHA-256 compression function
//!
//! Message schedule expansion, the 64-round function and the additive
//! update of the hash state, as in FIPS 180-4 section 6.2.2.

use core::sync::atomic::{compiler_fence, Ordering};

use byteorder::{BigEndian, ByteOrder};
use sha256_fips_params::utils::hash::{
    SHA256_BLOCK_WORDS, SHA256_OUTPUT_SIZE, SHA256_SCHEDULE_WORDS, SHA256_STATE_WORDS,
};
use zeroize::{Zeroize, Zeroizing};

use super::parse::MessageBlock;

/// SHA-256 round constants
pub const K: [u32; SHA256_SCHEDULE_WORDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash value H(0)
pub const H0: [u32; SHA256_STATE_WORDS] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Rotate right over exactly 32 bits
#[inline(always)]
pub fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Logical shift right
#[inline(always)]
pub fn shr(x: u32, n: u32) -> u32 {
    x >> n
}

/// σ0, used in schedule expansion
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

/// σ1, used in schedule expansion
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}

/// Σ0, applied to working variable `a`
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// Σ1, applied to working variable `e`
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// Ch: bits of `y` where `x` is set, bits of `z` elsewhere
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj: bitwise majority of the three inputs
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Expand a block into its 64-word message schedule.
///
/// The schedule is derived from message data, so it is wiped when dropped.
pub fn schedule(block: &MessageBlock) -> Zeroizing<[u32; SHA256_SCHEDULE_WORDS]> {
    let mut w = Zeroizing::new([0u32; SHA256_SCHEDULE_WORDS]);

    w[..SHA256_BLOCK_WORDS].copy_from_slice(&block.words);
    for t in SHA256_BLOCK_WORDS..SHA256_SCHEDULE_WORDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

/// The 8-word hash state carried from block to block
#[derive(Clone, Zeroize)]
pub struct HashState {
    h: [u32; SHA256_STATE_WORDS],
}

impl Drop for HashState {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// State initialised to H(0)
    pub fn new() -> Self {
        Self { h: H0 }
    }

    /// Current state words
    pub fn words(&self) -> &[u32; SHA256_STATE_WORDS] {
        &self.h
    }

    /// Run the compression function over one block and fold the result in.
    pub fn compress(&mut self, block: &MessageBlock) {
        let w = schedule(block);

        compiler_fence(Ordering::SeqCst);

        let mut vars = Zeroizing::new(self.h);
        let [a, b, c, d, e, f, g, h] = &mut *vars;

        for t in 0..SHA256_SCHEDULE_WORDS {
            let t1 = h
                .wrapping_add(big_sigma1(*e))
                .wrapping_add(ch(*e, *f, *g))
                .wrapping_add(K[t])
                .wrapping_add(w[t]);
            let t2 = big_sigma0(*a).wrapping_add(maj(*a, *b, *c));

            *h = *g;
            *g = *f;
            *f = *e;
            *e = d.wrapping_add(t1);
            *d = *c;
            *c = *b;
            *b = *a;
            *a = t1.wrapping_add(t2);
        }

        for (word, var) in self.h.iter_mut().zip(vars.iter()) {
            *word = word.wrapping_add(*var);
        }

        compiler_fence(Ordering::SeqCst);
    }

    /// Serialize the state to the 32-byte digest, each word big-endian
    pub fn to_bytes(&self) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.h, &mut out);
        out
    }
}

/// Fold every block, in order, into a fresh hash state.
pub fn compress_blocks<I>(blocks: I) -> HashState
where
    I: IntoIterator<Item = MessageBlock>,
{
    let mut state = HashState::new();
    for mut block in blocks {
        state.compress(&block);
        block.zeroize();
    }
    state
}
