//! Error type definitions for hashing operations

/// Primary error type for sha256-fips operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// The message is too long for its bit length to fit the 64-bit length field
    #[cfg_attr(
        feature = "std",
        error("{context}: input too large ({length} bytes, maximum is {max})")
    )]
    InputTooLarge {
        /// Where the oversized input was detected
        context: &'static str,
        /// Rejected length in bytes
        length: u64,
        /// Largest accepted length in bytes
        max: u64,
    },

    /// Invalid length error with context
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        /// Where the length mismatch occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("{context}: {message}"))]
    InvalidParameter {
        /// Name of the offending parameter
        context: &'static str,
        /// Why the parameter was rejected
        message: &'static str,
    },

    /// A working buffer could not be allocated
    #[cfg_attr(feature = "std", error("{context}: resource exhausted"))]
    ResourceExhausted {
        /// Which buffer failed to allocate
        context: &'static str,
    },
}

/// Result type for sha256-fips operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InputTooLarge { length, max, .. } => Self::InputTooLarge {
                context,
                length,
                max,
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::ResourceExhausted { .. } => Self::ResourceExhausted { context },
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InputTooLarge {
                context,
                length,
                max,
            } => write!(
                f,
                "{}: input too large ({} bytes, maximum is {})",
                context, length, max
            ),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidParameter { context, message } => write!(f, "{}: {}", context, message),
            Self::ResourceExhausted { context } => write!(f, "{}: resource exhausted", context),
        }
    }
}
