//! Keeping ranges valid across external text edits.
//!
//! The caller reports the full new text together with the selection that was
//! active before the edit. From the length difference and that selection the
//! reconciler works out where the edit happened and moves range bounds
//! accordingly. A deletion at a caret is located in the text first, so a
//! backspace and a forward delete move only the bounds after the removed
//! characters. Two paragraph edits get special treatment:
//!
//! - deleting the separator between two paragraph ranges merges them;
//! - pressing Enter on the empty line that ends a paragraph range leaves the
//!   paragraph instead of extending it.

use tracing::{debug, trace};

use crate::text::selection::Selection;
use crate::text::store::RangeStore;

/// Result of reconciling one edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReconcileOutcome {
    /// Same length; ranges were not looked at.
    Unchanged,
    /// Ranges were shifted; `changed` tells whether any bound moved.
    Shifted { changed: bool },
    /// Two paragraph ranges were joined and the store already holds the new
    /// text.
    ParagraphsMerged,
    /// The trailing empty line was taken out of its paragraph range. The text
    /// was left as it was before the edit and the caret belongs at `caret`.
    ParagraphEscaped { caret: usize },
}

impl ReconcileOutcome {
    /// Whether any range was touched.
    #[must_use]
    pub const fn ranges_changed(&self) -> bool {
        match self {
            Self::Unchanged => false,
            Self::Shifted { changed } => *changed,
            Self::ParagraphsMerged | Self::ParagraphEscaped { .. } => true,
        }
    }
}

/// Reconcile `store` with `new_text`, given the selection before the edit
/// and the one after it.
///
/// The store's text is only replaced on a paragraph merge; in every other
/// case the caller assigns it.
pub(crate) fn reconcile(
    store: &mut RangeStore,
    previous: Selection,
    next: Selection,
    new_text: &str,
) -> ReconcileOutcome {
    let old_len = store.len_chars();
    let new_len = new_text.chars().count();
    let delta = new_len as isize - old_len as isize;
    if delta == 0 {
        return ReconcileOutcome::Unchanged;
    }

    if previous.is_collapsed() {
        let caret = previous.start;
        if delta == -1 && merge_paragraphs(store, caret, new_text) {
            return ReconcileOutcome::ParagraphsMerged;
        }
        if delta == 1 && escape_paragraph(store, caret, new_text) {
            return ReconcileOutcome::ParagraphEscaped { caret };
        }
        if delta < 0 {
            let count = delta.unsigned_abs();
            if let Some(removed) = deleted_region(store, caret, count, next, new_text) {
                let changed = store.shift(removed, delta);
                return ReconcileOutcome::Shifted { changed };
            }
        }
    }

    let changed = store.shift(previous, delta);
    ReconcileOutcome::Shifted { changed }
}

/// Where `count` characters were deleted at `caret`: before it for a
/// backspace, after it for a forward delete.
///
/// When both readings produce `new_text` the caret after the edit decides:
/// it stays put on a forward delete.
fn deleted_region(
    store: &RangeStore,
    caret: usize,
    count: usize,
    next: Selection,
    new_text: &str,
) -> Option<Selection> {
    let rope = store.rope();
    let backspace = caret
        .checked_sub(count)
        .filter(|&start| rope.matches_without(new_text, start, caret));
    let forward = Some(caret).filter(|&start| rope.matches_without(new_text, start, start + count));

    let candidates = if next.is_collapsed() && next.start == caret {
        [forward, backspace]
    } else {
        [backspace, forward]
    };
    let start = candidates.into_iter().flatten().next()?;
    trace!(start, count, "located caret deletion");
    Some(Selection::new(start, start + count))
}

/// Join the paragraph ending at a deleted separator with the one starting
/// right after it. Handles backspace (separator before the caret) and
/// forward delete (separator at the caret).
fn merge_paragraphs(store: &mut RangeStore, caret: usize, new_text: &str) -> bool {
    let separator = store.separator();
    let candidates = [caret.checked_sub(1), Some(caret)];
    let Some(removed_at) = candidates.into_iter().flatten().find(|&idx| {
        store.rope().char_at(idx) == Some(separator)
            && store.rope().differs_by_one_at(new_text, idx, None)
    }) else {
        return false;
    };

    let paragraphs = store.paragraphs();
    let Some(first) = paragraphs.iter().find(|r| r.end == removed_at) else {
        return false;
    };
    let Some(second) = paragraphs.iter().find(|r| r.start == removed_at + 1) else {
        return false;
    };

    let merged = first.with_bounds(first.start, second.end - 1);
    let removed = [first.clone(), second.clone()];
    store.remove_paragraphs(&removed);
    store.shift(Selection::new(removed_at, removed_at + 1), -1);
    store.add_paragraph(merged.clone());
    store.set_text(new_text);

    debug!(
        at = removed_at,
        start = merged.start,
        end = merged.end,
        tag = %merged.tag,
        "merged paragraphs"
    );
    true
}

/// Shrink a paragraph range that ends on an empty line when a second
/// separator is typed there.
fn escape_paragraph(store: &mut RangeStore, caret: usize, new_text: &str) -> bool {
    let separator = store.separator();
    if caret == 0
        || store.rope().char_at(caret - 1) != Some(separator)
        || !store
            .rope()
            .differs_by_one_at(new_text, caret, Some(separator))
    {
        return false;
    }

    let Some(paragraph) = store
        .paragraphs_mut()
        .iter_mut()
        .find(|r| r.start < caret && r.end == caret)
    else {
        return false;
    };
    paragraph.end = caret - 1;
    let tag = paragraph.tag.clone();
    store.normalize();

    debug!(caret, tag = %tag, "escaped paragraph");
    true
}
