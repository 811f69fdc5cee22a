//! Error handling for hashing primitives

use core::fmt;

use sha256_fips_api::{Error as CoreError, Result as CoreResult};

/// The error type for hashing primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Message too long for the algorithm's length encoding
    InputTooLarge {
        /// Algorithm that rejected the input
        algorithm: &'static str,
        /// Rejected message length in bytes
        length: u64,
        /// Largest accepted message length in bytes
        max: u64,
    },

    /// A working buffer could not be allocated
    Allocation {
        /// Buffer whose allocation failed
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for hashing primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InputTooLarge {
                algorithm,
                length,
                max,
            } => {
                write!(
                    f,
                    "Input too large for {}: {} bytes exceeds the maximum of {}",
                    algorithm, length, max
                )
            }
            Error::Allocation { context } => {
                write!(f, "Allocation failed for {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InputTooLarge {
                algorithm,
                length,
                max,
            } => CoreError::InputTooLarge {
                context: algorithm,
                length,
                max,
            },
            Error::Allocation { context } => CoreError::ResourceExhausted { context },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use sha256_fips_api::error::ResultExt;

pub mod validate;
