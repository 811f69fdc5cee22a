//! Validation utilities for hashing primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a message length against an exclusive byte limit.
///
/// Pure integer comparison on the byte count, done before anything is
/// multiplied into a bit count.
#[inline(always)]
pub fn message_length(algorithm: &'static str, length: u64, limit: u64) -> Result<()> {
    if length >= limit {
        return Err(Error::InputTooLarge {
            algorithm,
            length,
            max: limit - 1,
        });
    }
    Ok(())
}
