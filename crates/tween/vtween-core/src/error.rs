//! Error types for the tween core.
//!
//! Stepping never fails. Errors only surface while building a tween or
//! parsing configuration; everything else follows the "no-op on invalid use"
//! policy of the fluent API.

use serde::{Deserialize, Serialize};

use crate::interp::InterpolatorKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TweenError {
    /// The requested value types do not match the interpolator kind.
    #[error("Interpolator {kind:?} drives {declared}, but {requested} was requested")]
    InterpolatorMismatch {
        kind: InterpolatorKind,
        declared: String,
        requested: String,
    },

    /// Numeric ease tag outside the 0..=30 range.
    #[error("Unknown ease tag: {tag}")]
    UnknownEaseTag { tag: u8 },

    /// Configuration could not be parsed.
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl TweenError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InterpolatorMismatch { .. } => "construction",
            Self::UnknownEaseTag { .. } => "validation",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for TweenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}
