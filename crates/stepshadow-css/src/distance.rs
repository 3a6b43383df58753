//! Validated maximum shadow distance.

use std::num::IntErrorKind;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{InvalidReason, ShadowError};

/// Largest offset, in pixels, of the outermost stepped layer.
///
/// Zero is allowed and produces an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MaxDistance(u32);

impl MaxDistance {
    /// Inclusive upper bound on the distance, keeping output bounded.
    pub const LIMIT: u32 = 128;

    /// Validate a pixel distance.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::InvalidArgument`] if `px` exceeds [`Self::LIMIT`].
    pub fn new(px: u32) -> Result<Self, ShadowError> {
        if px > Self::LIMIT {
            return Err(ShadowError::invalid(
                px.to_string(),
                InvalidReason::TooLarge { limit: Self::LIMIT },
            ));
        }
        Ok(Self(px))
    }

    /// Construct from a value known to be within bounds.
    ///
    /// Only for `const` items, where the bound check runs at compile time.
    pub(crate) const fn from_const(px: u32) -> Self {
        assert!(px <= Self::LIMIT);
        Self(px)
    }

    /// The distance in pixels.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for MaxDistance {
    type Error = ShadowError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(ShadowError::invalid(value.to_string(), InvalidReason::Negative));
        }
        match u32::try_from(value) {
            Ok(px) => Self::new(px),
            Err(_) => Err(ShadowError::invalid(
                value.to_string(),
                InvalidReason::TooLarge { limit: Self::LIMIT },
            )),
        }
    }
}

impl FromStr for MaxDistance {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(value) => Self::try_from(value).map_err(|err| match err {
                // Report the caller's text, not our re-rendering of it.
                ShadowError::InvalidArgument { reason, .. } => {
                    ShadowError::invalid(s.to_string(), reason)
                }
            }),
            Err(err) => {
                let reason = match err.kind() {
                    IntErrorKind::PosOverflow => InvalidReason::TooLarge { limit: Self::LIMIT },
                    IntErrorKind::NegOverflow => InvalidReason::Negative,
                    _ => InvalidReason::NotAnInteger,
                };
                Err(ShadowError::invalid(s.to_string(), reason))
            }
        }
    }
}

impl std::fmt::Display for MaxDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}
