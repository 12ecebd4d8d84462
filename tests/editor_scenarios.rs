//! End-to-end editing scenarios: style toggling, range collapsing, typing
//! history, paragraph merge/escape and the undo/redo laws.
//!
//! Run with:
//!   cargo test --test `editor_scenarios` -- --nocapture
//! With logging:
//!   `RUST_LOG=debug` cargo test --test `editor_scenarios` -- --nocapture

use rich_text_engine::{EditorOptions, EditorState, Selection, StyleRange, StyleToken};
use tracing::Level;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

fn bounds(ranges: &[StyleRange]) -> Vec<(usize, usize)> {
    ranges.iter().map(|r| (r.start, r.end)).collect()
}

/// Observable document: text plus both range collections.
fn document(state: &EditorState) -> (String, Vec<StyleRange>, Vec<StyleRange>) {
    (
        state.text(),
        state.span_ranges().to_vec(),
        state.paragraph_ranges().to_vec(),
    )
}

/// Type `inserted` at the caret, the way a text field reports it.
fn type_at(state: &EditorState, pos: usize, inserted: &str) -> EditorState {
    let state = state.with_selection(Selection::caret(pos));
    let current = state.text();
    let before: String = current.chars().take(pos).collect();
    let after: String = current.chars().skip(pos).collect();
    let text = format!("{before}{inserted}{after}");
    let caret = pos + inserted.chars().count();
    state
        .apply_external_change(&text, Selection::caret(caret), None)
        .0
}

/// Press backspace with the caret at `pos`.
fn backspace_at(state: &EditorState, pos: usize) -> EditorState {
    let state = state.with_selection(Selection::caret(pos));
    let mut text: Vec<char> = state.text().chars().collect();
    text.remove(pos - 1);
    let text: String = text.into_iter().collect();
    state
        .apply_external_change(&text, Selection::caret(pos - 1), None)
        .0
}

// ============================================================================
// Style Toggling
// ============================================================================

#[test]
fn bold_toggles_on_and_off() {
    init_logging();
    let state = EditorState::with_text("Hello world").with_selection(Selection::new(0, 5));

    let bold = state.insert_style(&StyleToken::Bold);
    assert_eq!(bold.span_ranges(), &[StyleRange::new(StyleToken::Bold, 0, 5)]);
    assert!(bold.current_styles().contains(&StyleToken::Bold));

    let plain = bold.insert_style(&StyleToken::Bold);
    assert!(plain.span_ranges().is_empty());
    assert!(plain.current_styles().is_empty());
}

#[test]
fn adjacent_insertions_collapse() {
    let state = EditorState::with_text("ab")
        .with_selection(Selection::new(0, 1))
        .insert_style(&StyleToken::Bold);
    assert_eq!(bounds(state.span_ranges()), vec![(0, 1)]);

    let state = state
        .with_selection(Selection::new(1, 2))
        .insert_style(&StyleToken::Bold);
    assert_eq!(state.span_ranges(), &[StyleRange::new(StyleToken::Bold, 0, 2)]);
}

#[test]
fn backwards_selection_is_normalized() {
    let state = EditorState::with_text("Hello world")
        .with_selection(Selection::new(11, 6))
        .insert_style(&StyleToken::Strikethrough);
    assert_eq!(bounds(state.span_ranges()), vec![(6, 11)]);
}

#[test]
fn text_size_is_clamped_and_tagged() {
    let state = EditorState::with_text("Hello")
        .with_selection(Selection::new(0, 5))
        .insert_style(&StyleToken::text_size(7.0));
    assert_eq!(state.span_ranges()[0].tag, "TextSize/2");
    assert_eq!(state.span_attributes_at(2).scale, Some(2.0));
}

#[test]
fn different_text_colors_coexist() {
    let red = StyleToken::text_color(rich_text_engine::Rgba::RED);
    let blue = StyleToken::text_color(rich_text_engine::Rgba::BLUE);
    let state = EditorState::with_text("Hello")
        .with_selection(Selection::new(0, 5))
        .insert_style(&red)
        .insert_style(&blue);
    assert_eq!(state.span_ranges().len(), 2);
    let styles = state.current_styles();
    assert!(styles.contains(&red) && styles.contains(&blue));

    let cleared = state.clear_styles(&[red]);
    assert!(cleared.span_ranges().is_empty());
}

// ============================================================================
// Typing
// ============================================================================

#[test]
fn typing_inside_a_range_extends_it() {
    let state = EditorState::with_text("Hello world")
        .with_selection(Selection::new(0, 5))
        .insert_style(&StyleToken::Italic);
    let state = type_at(&state, 2, "yy");
    assert_eq!(state.text(), "Heyyllo world");
    assert_eq!(bounds(state.span_ranges()), vec![(0, 7)]);
}

#[test]
fn clear_format_at_caret_stops_style_bleed() {
    let state = EditorState::with_text("Hello")
        .with_selection(Selection::new(0, 5))
        .insert_style(&StyleToken::Bold)
        .with_selection(Selection::caret(5))
        .insert_style(&StyleToken::ClearFormat);
    // Nothing strictly contains the caret at the end of the range.
    assert_eq!(bounds(state.span_ranges()), vec![(0, 5)]);

    let state = state
        .with_selection(Selection::caret(3))
        .insert_style(&StyleToken::ClearFormat);
    assert_eq!(bounds(state.span_ranges()), vec![(0, 2), (3, 5)]);
}

#[test]
fn replacing_selected_text_drops_covered_styles() {
    let state = EditorState::with_text("some styled text")
        .with_selection(Selection::new(5, 11))
        .insert_style(&StyleToken::Bold)
        .with_selection(Selection::new(3, 13));
    let (state, changed) = state.apply_external_change("somxext", Selection::caret(4), None);
    assert!(changed);
    assert!(state.span_ranges().is_empty());
}

// ============================================================================
// History
// ============================================================================

#[test]
fn large_insert_records_snapshot_small_insert_does_not() {
    init_logging();
    let state = EditorState::with_text("abcdef");
    assert_eq!(state.history().len(), 1);

    let state = type_at(&state, 3, "0123456789abcde");
    assert_eq!(state.text().chars().count(), 21);
    assert_eq!(state.history().len(), 2);

    let state = type_at(&state, 3, "xyz");
    assert_eq!(state.history().len(), 2);
    assert!(!state.history().current().text.contains("xyz"));
}

#[test]
fn small_insert_clears_redo_branch() {
    let state = EditorState::with_text("abc")
        .with_selection(Selection::new(0, 3))
        .insert_style(&StyleToken::Bold);
    let undone = state.undo().unwrap();
    assert!(undone.is_redo_available());

    let typed = type_at(&undone, 3, "d");
    assert!(!typed.is_redo_available());
    assert_eq!(typed.history().len(), 1);
}

#[test]
fn min_length_difference_is_configurable() {
    let options = EditorOptions::new().with_min_length_difference(2);
    let state = EditorState::with_options(options);
    let state = type_at(&state, 0, "ab");
    assert_eq!(state.history().len(), 2);
    let state = type_at(&state, 2, "c");
    assert_eq!(state.history().len(), 2);
}

#[test]
fn pending_typing_is_captured_by_undo() {
    let state = EditorState::with_text("abc");
    let typed = type_at(&state, 3, "de");
    assert_eq!(typed.history().len(), 1);

    let undone = typed.undo().unwrap();
    assert_eq!(undone.text(), "abc");
    let redone = undone.redo().unwrap();
    assert_eq!(redone.text(), "abcde");
}

#[test]
fn undo_then_redo_walks_every_step() {
    let s0 = EditorState::with_text("Hello world").with_selection(Selection::new(0, 5));
    let s1 = s0.insert_style(&StyleToken::Bold);
    let s2 = s1
        .with_selection(Selection::new(6, 11))
        .insert_style(&StyleToken::Italic);
    let s3 = s2
        .with_selection(Selection::new(0, 11))
        .insert_style(&StyleToken::AlignCenter);

    let u1 = s3.undo().unwrap();
    assert_eq!(document(&u1), document(&s2));
    let u2 = u1.undo().unwrap();
    assert_eq!(document(&u2), document(&s1));
    let u3 = u2.undo().unwrap();
    assert_eq!(document(&u3), document(&s0));
    assert!(!u3.is_undo_available());

    let r1 = u3.redo().unwrap();
    assert_eq!(document(&r1), document(&s1));
    let r2 = r1.redo().unwrap().redo().unwrap();
    assert_eq!(document(&r2), document(&s3));
    assert!(!r2.is_redo_available());
}

#[test]
fn paragraph_replacement_is_one_undo_step() {
    let s0 = EditorState::with_text("abc\ndef")
        .with_selection(Selection::new(1, 2))
        .insert_style(&StyleToken::AlignRight);
    let s1 = s0.insert_style(&StyleToken::OrderedList);
    assert_eq!(s1.paragraph_ranges()[0].token, StyleToken::OrderedList);

    let undone = s1.undo().unwrap();
    assert_eq!(document(&undone), document(&s0));
}

#[test]
fn new_edit_after_undo_invalidates_redo() {
    let state = EditorState::with_text("Hello")
        .with_selection(Selection::new(0, 5))
        .insert_style(&StyleToken::Bold)
        .insert_style(&StyleToken::Italic);
    let undone = state.undo().unwrap();
    assert!(undone.is_redo_available());

    let edited = undone
        .with_selection(Selection::new(0, 2))
        .insert_style(&StyleToken::Underline);
    assert!(!edited.is_redo_available());
    let again = edited.redo().unwrap();
    assert_eq!(document(&again), document(&edited));
}

#[test]
fn history_depth_is_bounded() {
    let options = EditorOptions::new().with_max_history_depth(4);
    let mut state = type_at(&EditorState::with_options(options), 0, "abcdefgh");
    for _ in 0..10 {
        state = state
            .with_selection(Selection::new(0, 4))
            .insert_style(&StyleToken::Bold);
    }
    assert_eq!(state.history().len(), 4);
    let mut undone = state;
    for _ in 0..10 {
        undone = undone.undo().unwrap();
    }
    assert_eq!(undone.history().offset(), 3);
}

// ============================================================================
// Paragraph Merge and Escape
// ============================================================================

#[test]
fn deleting_separator_merges_paragraphs() {
    init_logging();
    let state = EditorState::with_text("one\ntwo\nthree")
        .with_selection(Selection::new(4, 5))
        .insert_style(&StyleToken::AlignCenter)
        .with_selection(Selection::new(9, 10))
        .insert_style(&StyleToken::AlignCenter);
    assert_eq!(bounds(state.paragraph_ranges()), vec![(4, 7), (8, 13)]);

    let merged = backspace_at(&state, 8);
    assert_eq!(merged.text(), "one\ntwothree");
    assert_eq!(
        merged.paragraph_ranges(),
        &[StyleRange::new(StyleToken::AlignCenter, 4, 12)]
    );
    assert_eq!(merged.selection(), Selection::caret(7));
}

#[test]
fn merged_paragraph_keeps_first_style() {
    let state = EditorState::with_text("one\ntwo")
        .with_selection(Selection::new(0, 1))
        .insert_style(&StyleToken::OrderedList)
        .with_selection(Selection::new(5, 6))
        .insert_style(&StyleToken::AlignRight);

    let merged = backspace_at(&state, 4);
    assert_eq!(
        merged.paragraph_ranges(),
        &[StyleRange::new(StyleToken::OrderedList, 0, 6)]
    );
}

#[test]
fn enter_twice_leaves_list() {
    let state = EditorState::with_text("item")
        .with_selection(Selection::new(0, 4))
        .insert_style(&StyleToken::UnorderedList);

    let state = type_at(&state, 4, "\n");
    assert_eq!(bounds(state.paragraph_ranges()), vec![(0, 5)]);

    let escaped = type_at(&state, 5, "\n");
    assert_eq!(escaped.text(), "item\n");
    assert_eq!(escaped.selection(), Selection::caret(5));
    assert_eq!(bounds(escaped.paragraph_ranges()), vec![(0, 4)]);

    // Typing on the escaped line is unstyled.
    let typed = type_at(&escaped, 5, "x");
    assert_eq!(typed.paragraph_attributes_at(5), None);
    assert!(typed.paragraph_attributes_at(1).is_some());
}
