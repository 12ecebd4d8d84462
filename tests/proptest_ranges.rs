//! Property-based tests for range invariants under random editing sessions.
//!
//! Uses proptest to drive an editor through arbitrary selections, style
//! insertions, typing, deletions and undo/redo, and checks after every step
//! that the stored ranges stay well formed.

use proptest::prelude::*;
use rich_text_engine::{EditorState, Rgba, Selection, Snapshot, StyleRange, StyleToken};

// ============================================================================
// Strategies
// ============================================================================

fn styles() -> Vec<StyleToken> {
    vec![
        StyleToken::Bold,
        StyleToken::Italic,
        StyleToken::text_color(Rgba::RED),
        StyleToken::text_size(1.5),
        StyleToken::AlignCenter,
        StyleToken::AlignRight,
        StyleToken::UnorderedList,
        StyleToken::ClearFormat,
    ]
}

#[derive(Clone, Debug)]
enum Op {
    Select(usize, usize),
    Style(usize),
    Clear(usize),
    Type(usize, String),
    Delete(usize, usize),
    Backspace(usize),
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    let style_count = styles().len();
    prop_oneof![
        3 => (0..40usize, 0..40usize).prop_map(|(a, b)| Op::Select(a, b)),
        3 => (0..style_count).prop_map(Op::Style),
        1 => (0..style_count).prop_map(Op::Clear),
        3 => (0..40usize, "[ab\n]{1,12}").prop_map(|(pos, text)| Op::Type(pos, text)),
        2 => (0..40usize, 0..40usize).prop_map(|(a, b)| Op::Delete(a, b)),
        2 => (0..40usize).prop_map(Op::Backspace),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn initial_text() -> impl Strategy<Value = String> {
    "[abc \n]{0,30}"
}

// ============================================================================
// Helpers
// ============================================================================

fn splice(text: &str, start: usize, end: usize, inserted: &str) -> String {
    let before: String = text.chars().take(start).collect();
    let after: String = text.chars().skip(end).collect();
    format!("{before}{inserted}{after}")
}

fn apply(state: &EditorState, op: &Op) -> EditorState {
    let len = state.len_chars();
    let styles = styles();
    match op {
        Op::Select(a, b) => state.with_selection(Selection::new(a % (len + 1), b % (len + 1))),
        Op::Style(idx) => state.insert_style(&styles[*idx]),
        Op::Clear(idx) => state.clear_styles(&[styles[*idx].clone()]),
        Op::Type(pos, inserted) => {
            let pos = pos % (len + 1);
            let state = state.with_selection(Selection::caret(pos));
            let text = splice(&state.text(), pos, pos, inserted);
            let caret = pos + inserted.chars().count();
            state
                .apply_external_change(&text, Selection::caret(caret), None)
                .0
        }
        Op::Delete(a, b) => {
            let (start, end) = ((*a).min(*b) % (len + 1), (*a).max(*b) % (len + 1));
            if start >= end {
                return state.clone();
            }
            let state = state.with_selection(Selection::new(start, end));
            let text = splice(&state.text(), start, end, "");
            state
                .apply_external_change(&text, Selection::caret(start), None)
                .0
        }
        Op::Backspace(pos) => {
            if len == 0 {
                return state.clone();
            }
            let pos = 1 + pos % len;
            let state = state.with_selection(Selection::caret(pos));
            let text = splice(&state.text(), pos - 1, pos, "");
            state
                .apply_external_change(&text, Selection::caret(pos - 1), None)
                .0
        }
        Op::Undo => state.undo().expect("undo"),
        Op::Redo => state.redo().expect("redo"),
    }
}

fn document(state: &EditorState) -> (String, Vec<StyleRange>, Vec<StyleRange>) {
    (
        state.text(),
        state.span_ranges().to_vec(),
        state.paragraph_ranges().to_vec(),
    )
}

fn check_invariants(state: &EditorState) -> Result<(), TestCaseError> {
    let len = state.len_chars();
    for range in state.span_ranges().iter().chain(state.paragraph_ranges()) {
        prop_assert!(range.start < range.end, "degenerate range {:?}", range);
        prop_assert!(range.end <= len, "range {:?} past text length {}", range, len);
    }

    let mut paragraphs: Vec<&StyleRange> = state.paragraph_ranges().iter().collect();
    paragraphs.sort_by_key(|r| r.start);
    for pair in paragraphs.windows(2) {
        prop_assert!(
            pair[0].end <= pair[1].start,
            "paragraphs overlap: {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }

    let selection = state.selection();
    prop_assert!(selection.max() <= len);
    Ok(())
}

fn run(text: &str, ops: &[Op]) -> Result<EditorState, TestCaseError> {
    let mut state = EditorState::with_text(text);
    for op in ops {
        state = apply(&state, op);
        check_invariants(&state)?;
    }
    Ok(state)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No degenerate, out-of-bounds or overlapping paragraph ranges, ever.
    #[test]
    fn ranges_stay_well_formed(text in initial_text(), ops in prop::collection::vec(op(), 0..40)) {
        run(&text, &ops)?;
    }

    /// Restoring a snapshot reproduces it exactly.
    #[test]
    fn snapshot_restore_round_trip(text in initial_text(), ops in prop::collection::vec(op(), 0..30)) {
        let state = run(&text, &ops)?;
        let snapshot = state.snapshot();

        let restored = state.restore(&snapshot).expect("restore");
        prop_assert_eq!(&restored.snapshot(), &snapshot);

        let json = snapshot.to_json().expect("to_json");
        prop_assert_eq!(&Snapshot::from_json(&json).expect("from_json"), &snapshot);
    }

    /// Undo after a style change restores the previous document; redo
    /// brings the change back.
    #[test]
    fn undo_inverts_style_change(
        text in initial_text(),
        ops in prop::collection::vec(op(), 0..30),
        style in 0..8usize,
        a in 0..40usize,
        b in 0..40usize,
    ) {
        let state = run(&text, &ops)?;
        let len = state.len_chars();
        let before = state.with_selection(Selection::new(a % (len + 1), b % (len + 1)));
        let after = before.insert_style(&styles()[style]);
        prop_assume!(document(&after) != document(&before));

        let undone = after.undo().expect("undo");
        prop_assert_eq!(document(&undone), document(&before));

        let redone = undone.redo().expect("redo");
        prop_assert_eq!(document(&redone), document(&after));
    }

    /// Any new style change after an undo discards the redo branch.
    #[test]
    fn new_change_after_undo_drops_redo(
        text in "[abc]{4,20}",
        ops in prop::collection::vec(op(), 0..20),
    ) {
        let before = run(&text, &ops)?.with_selection(Selection::new(0, 2));
        let state = before.insert_style(&StyleToken::Bold);
        prop_assume!(document(&state) != document(&before));

        let undone = state.undo().expect("undo");
        prop_assert!(undone.is_redo_available());

        let edited = undone
            .with_selection(Selection::new(1, 3))
            .insert_style(&StyleToken::Italic);
        prop_assume!(document(&edited) != document(&undone));
        prop_assert!(!edited.is_redo_available());
    }

    /// Toggling the same text style twice over an unchanged selection is a no-op
    /// on the document.
    #[test]
    fn text_style_toggle_is_involutive(
        text in "[abc ]{1,30}",
        a in 0..30usize,
        b in 0..30usize,
        style in 0..4usize,
    ) {
        let len = text.chars().count();
        let state = EditorState::with_text(&text)
            .with_selection(Selection::new(a % (len + 1), b % (len + 1)));
        let token = &styles()[style];
        let twice = state.insert_style(token).insert_style(token);
        prop_assert_eq!(document(&twice), document(&state));
    }
}
