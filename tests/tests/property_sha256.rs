//! Property-based tests for the SHA-256 pipeline

use proptest::prelude::*;
use sha2::Digest as _;
use sha256_fips_algorithms::hash::sha256::{compress, pad, parse, plan};
use sha256_fips_algorithms::hash::{HashFunction, Sha256};

/// Messages long enough to cover zero, one and several blocks of padding
fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=600)
}

proptest! {
    #[test]
    fn padded_length_is_block_aligned(len in 0u64..(1u64 << 61)) {
        let p = plan::plan(len).unwrap();

        prop_assert_eq!(p.padded_len % 64, 0);
        prop_assert_eq!(p.bit_len, len * 8);
        prop_assert_eq!(p.padded_len, len + 1 + p.zero_bytes() + 8);
        prop_assert!(p.padded_len - len <= 72);
    }

    #[test]
    fn oversized_lengths_are_rejected(len in (1u64 << 61)..=u64::MAX) {
        prop_assert!(plan::plan(len).is_err());
    }

    #[test]
    fn padded_buffer_layout(msg in message()) {
        let p = plan::plan(msg.len() as u64).unwrap();
        let padded = pad::pad(&msg, &p).unwrap();
        let bytes = padded.as_bytes();

        prop_assert_eq!(bytes.len() % 64, 0);
        prop_assert_eq!(&bytes[..msg.len()], &msg[..]);
        prop_assert_eq!(bytes[msg.len()], 0x80);
        prop_assert!(bytes[msg.len() + 1..bytes.len() - 8].iter().all(|&b| b == 0));

        let mut length_field = [0u8; 8];
        length_field.copy_from_slice(&bytes[bytes.len() - 8..]);
        prop_assert_eq!(u64::from_be_bytes(length_field), msg.len() as u64 * 8);
    }

    #[test]
    fn parsed_blocks_cover_the_buffer(msg in message()) {
        let p = plan::plan(msg.len() as u64).unwrap();
        let padded = pad::pad(&msg, &p).unwrap();
        let blocks: Vec<_> = parse::blocks(&padded).collect();

        prop_assert_eq!(blocks.len(), padded.len() / 64);
        for (i, block) in blocks.iter().enumerate() {
            for (j, word) in block.words.iter().enumerate() {
                let at = i * 64 + j * 4;
                let mut raw = [0u8; 4];
                raw.copy_from_slice(&padded.as_bytes()[at..at + 4]);
                prop_assert_eq!(*word, u32::from_be_bytes(raw));
            }
        }
    }

    #[test]
    fn pipeline_matches_one_shot(msg in message()) {
        let p = plan::plan(msg.len() as u64).unwrap();
        let padded = pad::pad(&msg, &p).unwrap();
        let state = compress::compress_blocks(parse::blocks(&padded));

        let one_shot = Sha256::digest(&msg).unwrap();

        prop_assert_eq!(state.to_bytes(), *one_shot.as_bytes());
    }

    #[test]
    fn digest_is_32_bytes_and_deterministic(msg in message()) {
        let first = Sha256::digest(&msg).unwrap();
        let second = Sha256::digest(&msg).unwrap();

        prop_assert_eq!(first.as_ref().len(), 32);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn agrees_with_reference_implementation(msg in message()) {
        let ours = Sha256::digest(&msg).unwrap();
        let reference = sha2::Sha256::digest(&msg);

        prop_assert_eq!(ours.as_ref(), reference.as_slice());
    }
}
