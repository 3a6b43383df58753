//! Errors raised while building shadow lists.

use thiserror::Error;

/// Why a requested maximum distance was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The value was below zero.
    Negative,
    /// The value exceeded the largest distance we are willing to emit.
    TooLarge {
        /// Inclusive upper bound that was exceeded.
        limit: u32,
    },
    /// The text was not a base-10 non-negative integer.
    NotAnInteger,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => f.write_str("must not be negative"),
            Self::TooLarge { limit } => write!(f, "must be at most {limit}"),
            Self::NotAnInteger => f.write_str("must be a whole number of pixels"),
        }
    }
}

/// Error type for shadow list generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShadowError {
    /// The requested maximum distance is not a representable pixel count.
    #[error("invalid max distance '{value}': {reason}")]
    InvalidArgument {
        /// The rejected input, as given.
        value: String,
        /// What was wrong with it.
        reason: InvalidReason,
    },
}

impl ShadowError {
    pub(crate) const fn invalid(value: String, reason: InvalidReason) -> Self {
        Self::InvalidArgument { value, reason }
    }
}
