//! Styled ranges over the text buffer.

use crate::token::StyleToken;

/// A styled interval `[start, end)` in character offsets.
///
/// Equality is structural (token, tag and both bounds), which is what range
/// removal matches on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleRange {
    /// Style this range applies.
    pub token: StyleToken,
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    /// Identity key, `token.tag()` at creation.
    pub tag: String,
}

impl StyleRange {
    /// Create a range for `token`, deriving the tag from it.
    #[must_use]
    pub fn new(token: StyleToken, start: usize, end: usize) -> Self {
        let tag = token.tag();
        Self {
            token,
            start,
            end,
            tag,
        }
    }

    /// Same style over different bounds.
    #[must_use]
    pub fn with_bounds(&self, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }

    /// Check if this range overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if this range touches or overlaps another.
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Check if `pos` lies strictly between the bounds.
    #[must_use]
    pub fn strictly_contains(&self, pos: usize) -> bool {
        self.start < pos && pos < self.end
    }

    /// Check if this range covers a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        (self.start..self.end).contains(&pos)
    }

    /// Get the length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if degenerate (`end <= start`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
