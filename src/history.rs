//! Snapshots and the undo/redo stack.
//!
//! A [`Snapshot`] is an immutable copy of text, ranges and caret position.
//! Its serialized form is the persistence format:
//!
//! ```json
//! {
//!   "text": "Hello",
//!   "spanStyles": [{ "start": 0, "end": 5, "tag": "Bold/" }],
//!   "paragraphStyles": [],
//!   "selectionPosition": 0
//! }
//! ```
//!
//! [`History`] keeps snapshots oldest first plus an offset counted from the
//! newest one. The offset is 0 until the first undo.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::options::DEFAULT_MAX_HISTORY_DEPTH;
use crate::registry::StyleRegistry;
use crate::text::{RangeStore, StyleRange};

/// Serialized form of one range.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub start: usize,
    pub end: usize,
    pub tag: String,
}

impl From<&StyleRange> for RangeSnapshot {
    fn from(range: &StyleRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
            tag: range.tag.clone(),
        }
    }
}

impl RangeSnapshot {
    /// Rebuild the range, decoding its tag through `registry`.
    pub fn to_range(&self, registry: &StyleRegistry) -> Result<StyleRange> {
        let token = registry.from_tag(&self.tag).inspect_err(|err| {
            warn!(tag = %self.tag, error = %err, "cannot decode style tag");
        })?;
        Ok(StyleRange {
            token,
            start: self.start,
            end: self.end,
            tag: self.tag.clone(),
        })
    }
}

/// Recorded editor state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub text: String,
    pub span_styles: Vec<RangeSnapshot>,
    pub paragraph_styles: Vec<RangeSnapshot>,
    /// Caret position restored with the snapshot.
    pub selection_position: usize,
}

impl Snapshot {
    /// Capture the store's text and ranges.
    #[must_use]
    pub fn capture(store: &RangeStore, selection_position: usize) -> Self {
        Self {
            text: store.text(),
            span_styles: store.spans().iter().map(RangeSnapshot::from).collect(),
            paragraph_styles: store.paragraphs().iter().map(RangeSnapshot::from).collect(),
            selection_position,
        }
    }

    /// Check whether the store holds exactly this text and these ranges.
    #[must_use]
    pub fn matches(&self, store: &RangeStore) -> bool {
        fn same(stored: &[RangeSnapshot], live: &[StyleRange]) -> bool {
            stored.len() == live.len()
                && stored
                    .iter()
                    .zip(live)
                    .all(|(s, r)| s.start == r.start && s.end == r.end && s.tag == r.tag)
        }
        store.text_matches(&self.text)
            && same(&self.span_styles, store.spans())
            && same(&self.paragraph_styles, store.paragraphs())
    }

    /// Decode both range collections.
    pub fn ranges(&self, registry: &StyleRegistry) -> Result<(Vec<StyleRange>, Vec<StyleRange>)> {
        let spans = self
            .span_styles
            .iter()
            .map(|range| range.to_range(registry))
            .collect::<Result<Vec<_>>>()?;
        let paragraphs = self
            .paragraph_styles
            .iter()
            .map(|range| range.to_range(registry))
            .collect::<Result<Vec<_>>>()?;
        Ok((spans, paragraphs))
    }

    /// Character count of the stored text.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Snapshot stack with an undo offset and bounded depth.
///
/// Snapshots are shared between copies of an editor state, so cloning a
/// history only clones pointers.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Arc<Snapshot>>,
    offset: usize,
    /// Maximum number of snapshots to retain. Oldest entries are dropped when exceeded.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl History {
    /// History holding only `initial`.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self::with_max_depth(initial, DEFAULT_MAX_HISTORY_DEPTH)
    }

    /// Create a history with a custom maximum depth (at least 1).
    #[must_use]
    pub fn with_max_depth(initial: Snapshot, max_depth: usize) -> Self {
        Self {
            snapshots: vec![Arc::new(initial)],
            offset: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// The snapshot matching the current undo position.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1 - self.offset]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of undo steps taken since the last record.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.offset + 1 < self.snapshots.len()
    }

    #[must_use]
    pub const fn can_redo(&self) -> bool {
        self.offset > 0
    }

    /// Oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter().map(AsRef::as_ref)
    }

    /// Drop every snapshot newer than the current one.
    pub fn clear_redo(&mut self) {
        if self.offset > 0 {
            let keep = self.snapshots.len() - self.offset;
            self.snapshots.truncate(keep);
            debug!(dropped = self.offset, "cleared redo history");
            self.offset = 0;
        }
    }

    /// Drop the redo branch and push `snapshot` as the new current entry.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.clear_redo();
        self.snapshots.push(Arc::new(snapshot));
        // Enforce depth limit by dropping oldest entries
        if self.snapshots.len() > self.max_depth {
            let excess = self.snapshots.len() - self.max_depth;
            self.snapshots.drain(..excess);
        }
        debug!(len = self.snapshots.len(), "recorded snapshot");
    }

    /// Move one step towards older snapshots.
    pub fn step_back(&mut self) -> Option<Arc<Snapshot>> {
        if !self.can_undo() {
            return None;
        }
        self.offset += 1;
        debug!(offset = self.offset, "undo");
        Some(self.current_shared())
    }

    /// Move one step towards newer snapshots.
    pub fn step_forward(&mut self) -> Option<Arc<Snapshot>> {
        if !self.can_redo() {
            return None;
        }
        self.offset -= 1;
        debug!(offset = self.offset, "redo");
        Some(self.current_shared())
    }

    fn current_shared(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshots[self.snapshots.len() - 1 - self.offset])
    }
}
