//! Fuzz target for editing sessions.
//!
//! Drives an editor through arbitrary selections, style changes, text edits
//! and history steps and checks that the stored ranges stay within the text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rich_text_engine::{EditorState, Rgba, Selection, StyleToken};

#[derive(Arbitrary, Debug)]
enum Op {
    Select(u8, u8),
    Style(u8),
    Clear(u8),
    Replace { start: u8, end: u8, text: String },
    Undo,
    Redo,
}

fn token(idx: u8) -> StyleToken {
    match idx % 10 {
        0 => StyleToken::Bold,
        1 => StyleToken::Italic,
        2 => StyleToken::Underline,
        3 => StyleToken::text_color(Rgba::BLUE),
        4 => StyleToken::text_size(2.0),
        5 => StyleToken::AlignCenter,
        6 => StyleToken::AlignRight,
        7 => StyleToken::OrderedList,
        8 => StyleToken::UnorderedList,
        _ => StyleToken::ClearFormat,
    }
}

fuzz_target!(|input: (String, Vec<Op>)| {
    let (text, ops) = input;
    let mut state = EditorState::with_text(&text);

    for op in ops.into_iter().take(64) {
        let len = state.len_chars();
        state = match op {
            Op::Select(a, b) => {
                let bound = len + 1;
                state.with_selection(Selection::new(a as usize % bound, b as usize % bound))
            }
            Op::Style(idx) => state.insert_style(&token(idx)),
            Op::Clear(idx) => state.clear_styles(&[token(idx)]),
            Op::Replace { start, end, text } => {
                let bound = len + 1;
                let (a, b) = (start as usize % bound, end as usize % bound);
                let (a, b) = (a.min(b), a.max(b));
                let current = state.text();
                let before: String = current.chars().take(a).collect();
                let after: String = current.chars().skip(b).collect();
                let caret = a + text.chars().count();
                let state = state.with_selection(Selection::new(a, b));
                state
                    .apply_external_change(&format!("{before}{text}{after}"), Selection::caret(caret), None)
                    .0
            }
            Op::Undo => match state.undo() {
                Ok(next) => next,
                Err(_) => return,
            },
            Op::Redo => match state.redo() {
                Ok(next) => next,
                Err(_) => return,
            },
        };

        let len = state.len_chars();
        for range in state.span_ranges().iter().chain(state.paragraph_ranges()) {
            assert!(range.start < range.end && range.end <= len, "bad range {range:?}");
        }
    }
});
