//! Selections and the ranges they pick up.

use crate::text::range::StyleRange;

/// Selection or composition range in character offsets.
///
/// `start` is the anchor and may be greater than `end` for a backwards
/// selection; use [`normalized`](Self::normalized) for the ordered form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection at `pos`.
    #[must_use]
    pub const fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// A caret rather than a selection.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Get normalized (start <= end) selection.
    #[must_use]
    pub const fn normalized(&self) -> Self {
        Self {
            start: self.min(),
            end: self.max(),
        }
    }

    #[must_use]
    pub const fn min(&self) -> usize {
        if self.start <= self.end {
            self.start
        } else {
            self.end
        }
    }

    #[must_use]
    pub const fn max(&self) -> usize {
        if self.start <= self.end {
            self.end
        } else {
            self.start
        }
    }

    /// Number of selected characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.max() - self.min()
    }

    /// Both bounds limited to `len`.
    #[must_use]
    pub const fn clamped(&self, len: usize) -> Self {
        Self {
            start: if self.start < len { self.start } else { len },
            end: if self.end < len { self.end } else { len },
        }
    }

    /// Open-interval intersection with `[start, end)`.
    #[must_use]
    pub const fn intersects(&self, start: usize, end: usize) -> bool {
        self.min() < end && start < self.max()
    }
}

/// Ranges the selection picks up: every range intersecting it, nothing for a
/// caret.
pub fn intersecting(
    ranges: &[StyleRange],
    selection: Selection,
) -> impl Iterator<Item = &StyleRange> {
    ranges.iter().filter(move |range| {
        !selection.is_collapsed() && selection.intersects(range.start, range.end)
    })
}

/// Like [`intersecting`], restricted to ranges carrying `tag` when given.
pub fn intersecting_tagged<'a>(
    ranges: &'a [StyleRange],
    selection: Selection,
    tag: Option<&'a str>,
) -> impl Iterator<Item = &'a StyleRange> {
    intersecting(ranges, selection).filter(move |range| tag.is_none_or(|tag| range.tag == tag))
}
