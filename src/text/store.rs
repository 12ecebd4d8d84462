//! Text buffer plus span and paragraph ranges.
//!
//! [`RangeStore`] owns the document text and keeps two ordered collections of
//! styled ranges consistent with it. After every mutation the collections
//! hold no degenerate ranges, touching same-tag ranges are collapsed into one,
//! and paragraph ranges never overlap.

use tracing::trace;

use crate::text::range::StyleRange;
use crate::text::rope::RopeWrapper;
use crate::text::selection::Selection;

/// Text with its span and paragraph ranges.
#[derive(Clone, Debug)]
pub struct RangeStore {
    text: RopeWrapper,
    spans: Vec<StyleRange>,
    paragraphs: Vec<StyleRange>,
    separator: char,
}

impl Default for RangeStore {
    fn default() -> Self {
        Self::new('\n')
    }
}

impl RangeStore {
    /// Empty store splitting paragraphs on `separator`.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self {
            text: RopeWrapper::new(),
            spans: Vec::new(),
            paragraphs: Vec::new(),
            separator,
        }
    }

    /// Store with initial text and no ranges.
    #[must_use]
    pub fn with_text(text: &str, separator: char) -> Self {
        Self {
            text: RopeWrapper::from_str(text),
            ..Self::new(separator)
        }
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.to_string()
    }

    /// Get the underlying rope.
    #[must_use]
    pub fn rope(&self) -> &RopeWrapper {
        &self.text
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    /// Check whether the text equals `text`.
    #[must_use]
    pub fn text_matches(&self, text: &str) -> bool {
        self.text.matches(text)
    }

    /// Replace the text without touching any range.
    pub fn set_text(&mut self, text: &str) {
        self.text.replace(text);
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Character-level ranges.
    #[must_use]
    pub fn spans(&self) -> &[StyleRange] {
        &self.spans
    }

    /// Line-level ranges.
    #[must_use]
    pub fn paragraphs(&self) -> &[StyleRange] {
        &self.paragraphs
    }

    pub(crate) fn paragraphs_mut(&mut self) -> &mut Vec<StyleRange> {
        &mut self.paragraphs
    }

    /// Add a span range and collapse.
    pub fn add_span(&mut self, range: StyleRange) {
        self.add_spans([range]);
    }

    /// Add span ranges and collapse.
    pub fn add_spans(&mut self, ranges: impl IntoIterator<Item = StyleRange>) {
        self.spans.extend(ranges);
        collapse(&mut self.spans);
    }

    /// Add a paragraph range and collapse.
    pub fn add_paragraph(&mut self, range: StyleRange) {
        self.add_paragraphs([range]);
    }

    /// Add paragraph ranges, collapse, and trim any overlap.
    pub fn add_paragraphs(&mut self, ranges: impl IntoIterator<Item = StyleRange>) {
        self.paragraphs.extend(ranges);
        collapse(&mut self.paragraphs);
        trim_overlaps(&mut self.paragraphs);
    }

    /// Remove every span structurally equal to one in `ranges`.
    pub fn remove_spans(&mut self, ranges: &[StyleRange]) {
        self.spans.retain(|span| !ranges.contains(span));
    }

    /// Remove every paragraph structurally equal to one in `ranges`.
    pub fn remove_paragraphs(&mut self, ranges: &[StyleRange]) {
        self.paragraphs.retain(|paragraph| !ranges.contains(paragraph));
    }

    /// Replace both collections wholesale.
    pub fn set_ranges(&mut self, spans: Vec<StyleRange>, paragraphs: Vec<StyleRange>) {
        self.spans = spans;
        self.paragraphs = paragraphs;
        self.normalize();
    }

    /// Split every range strictly containing `pos`.
    ///
    /// The left piece ends at `pos - 1` and the right piece starts at `pos`,
    /// so the two never collapse back together.
    pub fn split_at(&mut self, pos: usize) {
        split_ranges_at(&mut self.spans, pos);
        split_ranges_at(&mut self.paragraphs, pos);
        self.normalize();
    }

    /// Move range bounds for a text edit that replaced `previous` and changed
    /// the length by `delta`. Returns whether any range was touched.
    pub fn shift(&mut self, previous: Selection, delta: isize) -> bool {
        let spans_updated = shift_ranges(&mut self.spans, previous, delta);
        let paragraphs_updated = shift_ranges(&mut self.paragraphs, previous, delta);
        self.normalize();
        trace!(
            ?previous,
            delta,
            spans = self.spans.len(),
            paragraphs = self.paragraphs.len(),
            "shifted ranges"
        );
        spans_updated || paragraphs_updated
    }

    /// Whole-paragraph expansion of a selection.
    #[must_use]
    pub fn paragraph_region(&self, selection: Selection) -> (usize, usize) {
        (
            self.text.start_of_paragraph(selection.min(), self.separator),
            self.text.end_of_paragraph(selection.max(), self.separator),
        )
    }

    /// Restore the collection invariants.
    pub(crate) fn normalize(&mut self) {
        collapse(&mut self.spans);
        collapse(&mut self.paragraphs);
        trim_overlaps(&mut self.paragraphs);
    }
}

/// Drop degenerate ranges and merge same-tag ranges that touch or overlap.
///
/// The merged range takes the slot of the earliest of its parts, so a
/// collection with nothing to merge keeps its order.
fn collapse(ranges: &mut Vec<StyleRange>) {
    ranges.retain(|range| !range.is_empty());

    let mut order: Vec<usize> = (0..ranges.len()).collect();
    order.sort_by(|&a, &b| {
        ranges[a]
            .tag
            .cmp(&ranges[b].tag)
            .then(ranges[a].start.cmp(&ranges[b].start))
    });

    let mut removed = vec![false; ranges.len()];
    let mut survivor: Option<usize> = None;
    for idx in order {
        if let Some(keep) = survivor {
            if ranges[keep].tag == ranges[idx].tag && ranges[keep].touches(&ranges[idx]) {
                let start = ranges[keep].start;
                let end = ranges[keep].end.max(ranges[idx].end);
                let (low, high) = if keep < idx { (keep, idx) } else { (idx, keep) };
                ranges[low].start = start;
                ranges[low].end = end;
                removed[high] = true;
                survivor = Some(low);
                continue;
            }
        }
        survivor = Some(idx);
    }

    if removed.contains(&true) {
        let mut idx = 0;
        ranges.retain(|_| {
            let keep = !removed[idx];
            idx += 1;
            keep
        });
    }
}

/// Cut overlapping ranges so the earlier one ends where the later one starts.
fn trim_overlaps(ranges: &mut Vec<StyleRange>) {
    let mut order: Vec<usize> = (0..ranges.len()).collect();
    order.sort_by_key(|&idx| (ranges[idx].start, ranges[idx].end));
    for pair in order.windows(2) {
        let next_start = ranges[pair[1]].start;
        let current = &mut ranges[pair[0]];
        if current.end > next_start {
            current.end = next_start;
        }
    }
    ranges.retain(|range| !range.is_empty());
}

fn split_ranges_at(ranges: &mut Vec<StyleRange>, pos: usize) {
    let mut tails = Vec::new();
    for range in ranges.iter_mut() {
        if range.strictly_contains(pos) {
            tails.push(range.with_bounds(pos, range.end));
            range.end = pos - 1;
        }
    }
    ranges.extend(tails);
}

fn shift_ranges(ranges: &mut [StyleRange], previous: Selection, delta: isize) -> bool {
    let prev_start = previous.min();
    let prev_end = previous.max();
    let inserted = previous.len().saturating_add_signed(delta);

    let mut updated = false;
    for range in ranges.iter_mut() {
        if previous.is_collapsed() {
            // Edit at the caret: boundaries at or after it move.
            let update_start = range.start > prev_end;
            let update_end = range.end >= prev_end;
            if update_start {
                range.start = range.start.saturating_add_signed(delta);
            }
            if update_end {
                range.end = range.end.saturating_add_signed(delta);
            }
            updated |= update_start || update_end;
        } else if prev_start <= range.start && prev_end >= range.end {
            // some |text *styled* te|xt
            range.start = 0;
            range.end = 0;
            updated = true;
        } else if prev_end <= range.start {
            // so|me te|xt *styled*
            range.start = range.start.saturating_add_signed(delta);
            range.end = range.end.saturating_add_signed(delta);
            updated = true;
        } else if range.end <= prev_start {
            // *styled* so|me te|xt
        } else if prev_start < range.start {
            // som|e *Tex|t*
            range.start = prev_start + inserted;
            range.end = range.end.saturating_add_signed(delta);
            updated = true;
        } else if prev_end > range.end {
            // some *Lo|ng* te|xt
            range.end = prev_start;
            updated = true;
        } else {
            // some *Lo|n|g* text
            range.end = range.end.saturating_add_signed(delta);
            updated = true;
        }
    }
    updated
}
