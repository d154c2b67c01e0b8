//! Errors from assembling or relinking baked area data.

use std::error::Error;
use std::fmt;

use navtk_core::{RegionId, Span};

/// Errors from building a baked area out of parts or replacing its
/// external links.
#[derive(Clone, Debug, PartialEq)]
pub enum BakedDataError {
    /// One external-link range must be given per region.
    RegionCountMismatch {
        /// Regions in the area.
        expected: usize,
        /// Ranges supplied.
        actual: usize,
    },
    /// A span does not fit inside the array it indexes.
    SpanOutOfRange {
        /// Which array the span indexes.
        array: &'static str,
        /// Region or link the span belongs to.
        owner: usize,
        /// The offending span.
        span: Span,
        /// Length of the indexed array.
        len: usize,
    },
    /// An internal link points at a region index the area does not have.
    UnknownRegion {
        /// Region the link belongs to.
        from: RegionId,
        /// The missing region index.
        to_index: u32,
    },
    /// A triangle or edge refers to a vertex the area does not have.
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: u32,
        /// Number of vertices in the area.
        vertex_count: usize,
    },
    /// Structural problem with the area's arrays or transform.
    InvalidGeometry {
        /// What is wrong.
        reason: String,
    },
}

impl fmt::Display for BakedDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionCountMismatch { expected, actual } => {
                write!(
                    f,
                    "external link ranges: expected one per region ({expected}), got {actual}"
                )
            }
            Self::SpanOutOfRange {
                array,
                owner,
                span,
                len,
            } => {
                write!(
                    f,
                    "{array} span {}..{} of entry {owner} exceeds array length {len}",
                    span.start,
                    span.end()
                )
            }
            Self::UnknownRegion { from, to_index } => {
                write!(f, "region {from} links to missing region index {to_index}")
            }
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => {
                write!(f, "vertex index {vertex} out of range for {vertex_count} vertices")
            }
            Self::InvalidGeometry { reason } => write!(f, "invalid area geometry: {reason}"),
        }
    }
}

impl Error for BakedDataError {}

/// Check that `span` fits in an array of `len` entries.
pub(crate) fn check_span(
    array: &'static str,
    owner: usize,
    span: Span,
    len: usize,
) -> Result<(), BakedDataError> {
    if span.fits(len) {
        Ok(())
    } else {
        Err(BakedDataError::SpanOutOfRange {
            array,
            owner,
            span,
            len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_check_reports_array() {
        assert!(check_span("triangle", 0, Span::new(0, 3), 3).is_ok());
        let err = check_span("triangle", 2, Span::new(3, 3), 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "triangle span 3..6 of entry 2 exceeds array length 4"
        );
    }
}
