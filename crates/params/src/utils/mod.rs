//! Constant values for sha256-fips hashing operations

pub mod hash;
