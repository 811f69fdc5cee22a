//! Avalanche smoke tests: a single flipped input bit must scramble the digest

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha256_fips::sha256;
use sha256_fips_tests::{bit_difference, flip_bit};

// Expected difference is 128 of 256 bits with a standard deviation of 8;
// anything below 64 means the input barely reaches the output.
const MIN_CHANGED_BITS: u32 = 64;

fn check_every_bit(message: &[u8]) {
    let base = sha256(message).unwrap();

    let mut total = 0u64;
    for bit in 0..message.len() * 8 {
        let mut flipped = message.to_vec();
        flip_bit(&mut flipped, bit);

        let changed = bit_difference(base.as_ref(), sha256(&flipped).unwrap().as_ref());
        assert!(
            changed >= MIN_CHANGED_BITS,
            "flipping bit {} of a {}-byte message changed only {} digest bits",
            bit,
            message.len(),
            changed
        );
        total += changed as u64;
    }

    // The average should sit close to half the digest
    let flips = (message.len() * 8) as u64;
    let mean = total / flips;
    assert!((112..=144).contains(&mean), "mean changed bits {}", mean);
}

#[test]
fn test_avalanche_single_block() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed_0001);
    let mut message = vec![0u8; 32];
    rng.fill_bytes(&mut message);

    check_every_bit(&message);
}

#[test]
fn test_avalanche_across_block_boundary() {
    // 100 bytes spans two blocks, so flips in the first block must survive
    // the second compression
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed_0002);
    let mut message = vec![0u8; 100];
    rng.fill_bytes(&mut message);

    check_every_bit(&message);
}

#[test]
fn test_length_changes_digest() {
    // Trailing zero bytes are not absorbed by the padding
    let mut previous = sha256(&[]).unwrap();
    for len in 1..=130 {
        let current = sha256(&vec![0u8; len]).unwrap();
        assert!(
            bit_difference(previous.as_ref(), current.as_ref()) >= MIN_CHANGED_BITS,
            "zero messages of length {} and {} hash too similarly",
            len - 1,
            len
        );
        previous = current;
    }
}
