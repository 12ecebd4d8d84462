//! Editor state with styled ranges and snapshot undo/redo.
//!
//! This module provides [`EditorState`], the value an editing widget holds
//! between events. Every operation leaves `self` untouched and returns the
//! next state, so earlier states stay valid.
//!
//! # Examples
//!
//! ```
//! use rich_text_engine::{EditorState, Selection, StyleToken};
//!
//! let state = EditorState::with_text("Hello world")
//!     .with_selection(Selection::new(0, 5))
//!     .insert_style(&StyleToken::Bold);
//! assert!(state.current_styles().contains(&StyleToken::Bold));
//!
//! // Inserting the same style again toggles it off.
//! let state = state.insert_style(&StyleToken::Bold);
//! assert!(state.current_styles().is_empty());
//!
//! // Undo brings the range back and leaves a caret at the recorded position.
//! let state = state.undo().unwrap();
//! assert_eq!(state.span_ranges().len(), 1);
//! assert_eq!(state.selection(), Selection::caret(0));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use tracing::trace;

use crate::error::Result;
use crate::history::{History, Snapshot};
use crate::options::EditorOptions;
use crate::registry::StyleRegistry;
use crate::style::{ParagraphAttributes, SpanAttributes};
use crate::text::range::StyleRange;
use crate::text::reconcile::{ReconcileOutcome, reconcile};
use crate::text::selection::{Selection, intersecting};
use crate::text::store::RangeStore;
use crate::text::style_edit;
use crate::token::{StyleClass, StyleToken};

/// Text, styled ranges, selection and history of one editor.
///
/// `EditorState` is a value: [`insert_style`](Self::insert_style),
/// [`clear_styles`](Self::clear_styles), [`undo`](Self::undo),
/// [`redo`](Self::redo), [`apply_external_change`](Self::apply_external_change)
/// and [`restore`](Self::restore) work on a copy and return it.
///
/// # History Management
///
/// A snapshot is recorded after every style change. Typing is coalesced:
/// an external edit only records a snapshot once the text has grown by
/// [`EditorOptions::min_length_difference`] characters since the last one;
/// smaller edits just drop the redo branch. Pending typing is captured right
/// before the next style change or undo.
#[derive(Clone, Debug)]
pub struct EditorState {
    store: RangeStore,
    selection: Selection,
    composition: Option<Selection>,
    history: History,
    registry: Arc<StyleRegistry>,
    options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Empty editor with the built-in styles.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts("", Arc::new(StyleRegistry::default()), EditorOptions::default())
    }

    /// Create an editor with initial text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self::from_parts(text, Arc::new(StyleRegistry::default()), EditorOptions::default())
    }

    /// Empty editor using `registry` for style classes and tag decoding.
    #[must_use]
    pub fn with_registry(registry: Arc<StyleRegistry>) -> Self {
        Self::from_parts("", registry, EditorOptions::default())
    }

    /// Empty editor with custom options.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        Self::from_parts("", Arc::new(StyleRegistry::default()), options)
    }

    /// Create an editor from all of its configuration. The initial state is
    /// the first history entry.
    #[must_use]
    pub fn from_parts(text: &str, registry: Arc<StyleRegistry>, options: EditorOptions) -> Self {
        let store = RangeStore::with_text(text, options.line_separator);
        let selection = Selection::default();
        let history = History::with_max_depth(
            Snapshot::capture(&store, selection.start),
            options.max_history_depth,
        );
        Self {
            store,
            selection,
            composition: None,
            history,
            registry,
            options,
        }
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.store.text()
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.store.len_chars()
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub const fn composition(&self) -> Option<Selection> {
        self.composition
    }

    #[must_use]
    pub fn span_ranges(&self) -> &[StyleRange] {
        self.store.spans()
    }

    #[must_use]
    pub fn paragraph_ranges(&self) -> &[StyleRange] {
        self.store.paragraphs()
    }

    /// Span and paragraph ranges, for painting.
    #[must_use]
    pub fn styled_ranges(&self) -> (&[StyleRange], &[StyleRange]) {
        (self.store.spans(), self.store.paragraphs())
    }

    #[must_use]
    pub fn store(&self) -> &RangeStore {
        &self.store
    }

    #[must_use]
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn options(&self) -> &EditorOptions {
        &self.options
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn is_undo_available(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub const fn is_redo_available(&self) -> bool {
        self.history.can_redo()
    }

    /// Composition if present, else the selection, start before end.
    #[must_use]
    pub fn current_selection(&self) -> Selection {
        self.composition.unwrap_or(self.selection).normalized()
    }

    /// Styles of every range intersecting the current selection. Empty for a
    /// caret.
    #[must_use]
    pub fn current_styles(&self) -> HashSet<StyleToken> {
        let selection = self.current_selection();
        intersecting(self.store.spans(), selection)
            .chain(intersecting(self.store.paragraphs(), selection))
            .map(|range| range.token.clone())
            .collect()
    }

    /// Merged character attributes of every span covering `offset`.
    #[must_use]
    pub fn span_attributes_at(&self, offset: usize) -> SpanAttributes {
        self.store
            .spans()
            .iter()
            .filter(|range| range.contains(offset))
            .filter_map(|range| self.registry.span_attributes(&range.token))
            .fold(SpanAttributes::NONE, SpanAttributes::merge)
    }

    /// Attributes of the paragraph range covering `offset`.
    #[must_use]
    pub fn paragraph_attributes_at(&self, offset: usize) -> Option<ParagraphAttributes> {
        self.store
            .paragraphs()
            .iter()
            .find(|range| range.contains(offset))
            .and_then(|range| self.registry.paragraph_attributes(&range.token))
    }

    /// Capture the live state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.store, self.selection.start)
    }

    /// Apply `token` to the current selection, or take it away where it is
    /// already applied.
    ///
    /// With a caret, [`StyleToken::ClearFormat`] splits the ranges around it
    /// so text typed there starts unstyled.
    #[must_use]
    pub fn insert_style(&self, token: &StyleToken) -> Self {
        let mut next = self.clone();
        next.insert_style_in_place(token);
        next
    }

    /// Remove every range in the current selection whose kind matches one of
    /// `tokens`, whatever its parameter.
    #[must_use]
    pub fn clear_styles(&self, tokens: &[StyleToken]) -> Self {
        let mut next = self.clone();
        next.clear_styles_in_place(tokens);
        next
    }

    /// Step back one snapshot. A no-op when nothing is left to undo.
    pub fn undo(&self) -> Result<Self> {
        let mut next = self.clone();
        next.update_history_if_necessary();
        if let Some(snapshot) = next.history.step_back() {
            next.restore_from(&snapshot)?;
        }
        Ok(next)
    }

    /// Step forward one snapshot. A no-op when nothing is left to redo.
    pub fn redo(&self) -> Result<Self> {
        let mut next = self.clone();
        if let Some(snapshot) = next.history.step_forward() {
            next.restore_from(&snapshot)?;
        }
        Ok(next)
    }

    /// Replace the state with `snapshot` as a new undoable step.
    pub fn restore(&self, snapshot: &Snapshot) -> Result<Self> {
        let mut next = self.clone();
        next.update_history_if_necessary();
        next.restore_from(snapshot)?;
        next.record_history();
        Ok(next)
    }

    /// Take in an edit made by the text widget: the full new text plus the
    /// selection and composition after the edit.
    ///
    /// Returns the next state and whether anything changed.
    #[must_use]
    pub fn apply_external_change(
        &self,
        text: &str,
        selection: Selection,
        composition: Option<Selection>,
    ) -> (Self, bool) {
        let mut next = self.clone();
        let changed = next.apply_external_change_in_place(text, selection, composition);
        (next, changed)
    }

    /// Move the selection without editing text.
    #[must_use]
    pub fn with_selection(&self, selection: Selection) -> Self {
        self.apply_external_change(&self.text(), selection, None).0
    }

    fn insert_style_in_place(&mut self, token: &StyleToken) {
        let selection = self.current_selection();
        let class = self.registry.class_of(token);
        let is_clear = matches!(token, StyleToken::ClearFormat);
        trace!(tag = %token.tag(), ?selection, ?class, "insert style");

        if selection.is_collapsed() && is_clear {
            self.update_history_if_necessary();
            self.store.split_at(selection.end);
            self.record_history();
            return;
        }

        let plan = style_edit::plan(&self.store, selection, token, class);
        let mut changed = false;
        if !plan.is_empty() {
            self.update_history_if_necessary();
            // Removal first so the kept pieces do not collapse back into the
            // range they were cut from.
            self.store.remove_spans(&plan.spans.to_remove);
            self.store.add_spans(plan.spans.to_add.iter().cloned());
            self.store.remove_paragraphs(&plan.paragraphs);

            // Another paragraph style was in the way: replace it below.
            let replacing = class == Some(StyleClass::Paragraph)
                && !plan.paragraphs.is_empty()
                && !plan.removes_paragraph_tagged(&token.tag());
            if !replacing {
                self.record_history();
                return;
            }
            changed = true;
        } else if is_clear || (self.composition.is_none() && self.selection.is_collapsed()) {
            return;
        } else {
            self.update_history_if_necessary();
        }

        let (span, paragraph) =
            style_edit::new_ranges(&self.store, selection, token, class, &plan.paragraphs);
        if let Some(span) = span.filter(|range| !range.is_empty()) {
            self.store.add_span(span);
            changed = true;
        }
        if let Some(paragraph) = paragraph.filter(|range| !range.is_empty()) {
            self.store.add_paragraph(paragraph);
            changed = true;
        }
        if changed {
            self.record_history();
        }
    }

    fn clear_styles_in_place(&mut self, tokens: &[StyleToken]) {
        let selection = self.current_selection();
        let prefixes: Vec<String> = tokens.iter().map(StyleToken::base_tag).collect();
        let matching = |range: &&StyleRange| {
            prefixes
                .iter()
                .any(|prefix| range.tag.starts_with(prefix.as_str()))
        };

        let spans: Vec<StyleRange> = intersecting(self.store.spans(), selection)
            .filter(matching)
            .cloned()
            .collect();
        let paragraphs: Vec<StyleRange> = intersecting(self.store.paragraphs(), selection)
            .filter(matching)
            .cloned()
            .collect();
        if spans.is_empty() && paragraphs.is_empty() {
            return;
        }

        self.update_history_if_necessary();
        self.store.remove_spans(&spans);
        self.store.remove_paragraphs(&paragraphs);
        self.record_history();
    }

    fn apply_external_change_in_place(
        &mut self,
        text: &str,
        selection: Selection,
        composition: Option<Selection>,
    ) -> bool {
        let len = text.chars().count();
        let selection = selection.clamped(len);
        let composition = composition.map(|range| range.clamped(len));

        let outcome = reconcile(&mut self.store, self.selection, selection, text);
        if !outcome.ranges_changed()
            && self.store.text_matches(text)
            && self.selection == selection
            && self.composition == composition
        {
            return false;
        }

        match outcome {
            ReconcileOutcome::ParagraphEscaped { caret } => {
                self.selection = Selection::caret(caret);
                self.composition = None;
            }
            ReconcileOutcome::ParagraphsMerged => {
                self.selection = selection;
                self.composition = composition;
            }
            ReconcileOutcome::Unchanged | ReconcileOutcome::Shifted { .. } => {
                self.store.set_text(text);
                self.selection = selection;
                self.composition = composition;
            }
        }

        // An escaped paragraph keeps the old text, so compare the store itself.
        let current = self.history.current();
        let grown = self.store.len_chars().checked_sub(current.len_chars());
        if grown.is_some_and(|chars| chars >= self.options.min_length_difference) {
            self.record_history();
        } else if !current.matches(&self.store) {
            self.history.clear_redo();
        }
        true
    }

    /// Record the live state unless the current snapshot already holds it.
    fn update_history_if_necessary(&mut self) {
        if !self.history.current().matches(&self.store) {
            self.record_history();
        }
    }

    fn record_history(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    fn restore_from(&mut self, snapshot: &Snapshot) -> Result<()> {
        let (spans, paragraphs) = snapshot.ranges(&self.registry)?;
        self.store.set_text(&snapshot.text);
        self.store.set_ranges(spans, paragraphs);
        self.selection = Selection::caret(snapshot.selection_position.min(self.store.len_chars()));
        self.composition = None;
        Ok(())
    }
}
