//! Cross-checks against the `sha2` crate over random lengths and contents

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Digest as _;
use sha256_fips_algorithms::hash::{HashFunction, Sha256};

fn reference(message: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&sha2::Sha256::digest(message));
    out
}

#[test]
fn test_every_length_up_to_three_blocks() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut message = vec![0u8; 200];
    rng.fill_bytes(&mut message);

    for len in 0..=message.len() {
        let ours = Sha256::digest(&message[..len]).unwrap();
        assert_eq!(
            ours.as_bytes(),
            &reference(&message[..len]),
            "mismatch at length {}",
            len
        );
    }
}

#[test]
fn test_random_long_messages() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..32 {
        let len = rng.gen_range(0..20_000);
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);

        let ours = Sha256::digest(&message).unwrap();
        assert_eq!(ours.as_bytes(), &reference(&message), "mismatch at length {}", len);
    }
}
