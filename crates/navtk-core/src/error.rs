//! Error types for core value construction.

use std::error::Error;
use std::fmt;

/// Errors from constructing core values out of untrusted input.
#[derive(Clone, Debug, PartialEq)]
pub enum CoreError {
    /// A span's `start + len` does not fit in `u32`.
    SpanOverflow {
        /// Requested start.
        start: usize,
        /// Requested length.
        len: usize,
    },
    /// A bounding box has a NaN or infinite corner, or `min > max` on some axis.
    InvalidBounds {
        /// Description of the offending corner.
        reason: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpanOverflow { start, len } => {
                write!(f, "span {start}+{len} does not fit in u32")
            }
            Self::InvalidBounds { reason } => write!(f, "invalid bounds: {reason}"),
        }
    }
}

impl Error for CoreError {}
