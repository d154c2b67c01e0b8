//! Index ranges into an area's shared arrays.

use std::ops::Range;

use crate::error::CoreError;

/// A `(start, len)` range into one of a baked area's flat arrays.
///
/// Regions and links never own storage of their own; they hold spans into
/// the arrays of the area that contains them. Spans are consumer contracts:
/// the baked data trusts the bake that produced them and does not re-check
/// that spans are disjoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// First element of the range.
    pub start: u32,
    /// Number of elements in the range.
    pub len: u32,
}

impl Span {
    /// The empty span at offset zero.
    pub const EMPTY: Span = Span { start: 0, len: 0 };

    /// Create a span from raw parts.
    pub const fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Create a span covering `start..end` of a `usize`-indexed array.
    ///
    /// Fails if either bound does not fit in `u32` or `end < start`.
    pub fn from_range(range: Range<usize>) -> Result<Self, CoreError> {
        let len = range.end.checked_sub(range.start).ok_or(CoreError::SpanOverflow {
            start: range.start,
            len: 0,
        })?;
        match (u32::try_from(range.start), u32::try_from(range.end)) {
            (Ok(start), Ok(_)) => Ok(Self {
                start,
                len: len as u32,
            }),
            _ => Err(CoreError::SpanOverflow {
                start: range.start,
                len,
            }),
        }
    }

    /// One past the last element.
    pub fn end(self) -> usize {
        self.start as usize + self.len as usize
    }

    /// The span as a `usize` range, ready for slicing.
    pub fn range(self) -> Range<usize> {
        self.start as usize..self.end()
    }

    /// Whether the span covers no elements.
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Whether the span lies entirely within an array of `len` elements.
    pub fn fits(self, len: usize) -> bool {
        self.end() <= len
    }

    /// Slice `items` by this span.
    ///
    /// # Panics
    ///
    /// Panics if the span does not fit in `items`.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        &items[self.range()]
    }
}
