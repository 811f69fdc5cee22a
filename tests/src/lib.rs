//! Testing utilities and vector suites for the sha256-fips library

/// Number of differing bits between two equally sized byte strings
pub fn bit_difference(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len(), "inputs must have the same length");
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// Flip bit `bit` (0 = most significant bit of byte 0) of `data`
pub fn flip_bit(data: &mut [u8], bit: usize) {
    data[bit / 8] ^= 0x80 >> (bit % 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_difference() {
        assert_eq!(bit_difference(&[0x00, 0xff], &[0x00, 0xff]), 0);
        assert_eq!(bit_difference(&[0x0f], &[0xf0]), 8);
        assert_eq!(bit_difference(&[0x01, 0x80], &[0x00, 0x00]), 2);
    }

    #[test]
    fn test_flip_bit() {
        let mut data = [0u8; 2];
        flip_bit(&mut data, 0);
        flip_bit(&mut data, 15);
        assert_eq!(data, [0x80, 0x01]);
    }
}
