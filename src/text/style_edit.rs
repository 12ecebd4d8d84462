//! Range deltas for style insertion.
//!
//! Inserting a style first takes it away from the selection: every matching
//! range that intersects the selection is removed, and the parts of it that
//! lie outside the selection are added back. Only when nothing matched is the
//! style applied as a new range.

use crate::text::range::StyleRange;
use crate::text::selection::{Selection, intersecting_tagged};
use crate::text::store::RangeStore;
use crate::token::{StyleClass, StyleToken};

/// Ranges to add and remove for one edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RangeDelta {
    pub to_add: Vec<StyleRange>,
    pub to_remove: Vec<StyleRange>,
}

impl RangeDelta {
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Cut `[start, end)` out of every range in `ranges`.
///
/// Each range is assumed to intersect the interval.
pub(crate) fn remove_from_selection<'a>(
    ranges: impl IntoIterator<Item = &'a StyleRange>,
    start: usize,
    end: usize,
) -> RangeDelta {
    let mut delta = RangeDelta::default();
    for range in ranges {
        delta.to_remove.push(range.clone());

        if range.start <= start && range.end >= end {
            // Split around the selection.
            let before = range.with_bounds(range.start, start);
            let after = range.with_bounds(end, range.end);
            delta
                .to_add
                .extend([before, after].into_iter().filter(|piece| !piece.is_empty()));
        } else if range.start >= start && range.end <= end {
            // Covered entirely.
        } else if range.start >= start {
            delta.to_add.push(range.with_bounds(end, range.end));
        } else {
            delta.to_add.push(range.with_bounds(range.start, start));
        }
    }
    delta
}

/// What inserting a style would take away from the current ranges.
#[derive(Clone, Debug, Default)]
pub(crate) struct StylePlan {
    pub spans: RangeDelta,
    /// Paragraph ranges to drop. Paragraph styles never split, so the
    /// leftover pieces are discarded.
    pub paragraphs: Vec<StyleRange>,
}

impl StylePlan {
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty() && self.paragraphs.is_empty()
    }

    /// Paragraph toggle-off: a removed paragraph already carried `tag`.
    pub fn removes_paragraph_tagged(&self, tag: &str) -> bool {
        self.paragraphs.iter().any(|range| range.tag == tag)
    }
}

/// Compute the removals for inserting `token` of class `class` over the
/// normalized `selection`.
pub(crate) fn plan(
    store: &RangeStore,
    selection: Selection,
    token: &StyleToken,
    class: Option<StyleClass>,
) -> StylePlan {
    let tag = token.tag();
    let clear = matches!(token, StyleToken::ClearFormat);

    let span_filter = (!clear).then_some(tag.as_str());
    let spans = remove_from_selection(
        intersecting_tagged(store.spans(), selection, span_filter),
        selection.start,
        selection.end,
    );

    let paragraphs = if selection.is_collapsed() {
        Vec::new()
    } else {
        let (start, end) = store.paragraph_region(selection);
        let region = Selection::new(start, end);
        let paragraph_filter =
            (!clear && class != Some(StyleClass::Paragraph)).then_some(tag.as_str());
        remove_from_selection(
            intersecting_tagged(store.paragraphs(), region, paragraph_filter),
            start,
            end,
        )
        .to_remove
    };

    StylePlan { spans, paragraphs }
}

/// Ranges to add for a style that was not present in the selection.
///
/// A text style covers exactly the selection. A paragraph style covers every
/// paragraph the selection touches, widened to a single paragraph range that
/// was just removed.
pub(crate) fn new_ranges(
    store: &RangeStore,
    selection: Selection,
    token: &StyleToken,
    class: Option<StyleClass>,
    removed_paragraphs: &[StyleRange],
) -> (Option<StyleRange>, Option<StyleRange>) {
    match class {
        Some(StyleClass::Text) => (
            Some(StyleRange::new(
                token.clone(),
                selection.start,
                selection.end,
            )),
            None,
        ),
        Some(StyleClass::Paragraph) => {
            let (mut start, mut end) = store.paragraph_region(selection);
            if let [removed] = removed_paragraphs {
                start = start.min(removed.start);
                end = end.max(removed.end);
            }
            (None, Some(StyleRange::new(token.clone(), start, end)))
        }
        Some(StyleClass::ClearFormat) | None => (None, None),
    }
}
