//! Fixed parameters of a hash algorithm

/// Compile-time description of a hash algorithm.
///
/// Implemented by uninhabited marker types, so the parameters can be used
/// in const contexts and generic bounds without constructing anything.
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm identifier, e.g. `"SHA-256"`
    const ALGORITHM_ID: &'static str;

    /// Human-readable algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}
