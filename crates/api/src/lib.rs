//! Public API traits and types for the sha256-fips library
//!
//! This crate provides the public API surface shared by the sha256-fips
//! crates: the error type returned across crate boundaries and the trait
//! describing a hash algorithm's fixed parameters.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::HashAlgorithm;
