//! Constant values for sha256-fips operations
//!
//! This crate provides the sizes and limits shared by every stage of the
//! SHA-256 pipeline. It has no dependencies and is always `no_std`.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod utils;

pub use utils::hash::*;
