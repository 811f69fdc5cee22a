//! Type-safe wrappers for hashing outputs
//!
//! This module provides the digest type returned by the hash functions,
//! plus the small traits that describe how such values are compared and
//! serialized.

use alloc::vec::Vec;

pub mod digest;

pub use digest::Digest;

/// Trait for values with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

/// Trait for types that can be serialized to a byte representation
pub trait ByteSerializable: Sized {
    /// Convert to a byte vector
    fn to_bytes(&self) -> Vec<u8>;

    /// Try to create from a byte slice
    fn from_bytes(bytes: &[u8]) -> crate::error::Result<Self>;
}
