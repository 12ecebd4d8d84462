//! Text storage and styled range management.
//!
//! This module provides the rope-backed text buffer, the styled ranges laid
//! over it, and the editor state that keeps both consistent under edits.
//!
//! Key types:
//!
//! - [`RangeStore`]: text plus span and paragraph ranges
//! - [`StyleRange`]: one styled interval
//! - [`Selection`]: selection or composition range
//! - [`EditorState`]: copy-on-write editor value with undo/redo
//!
//! # Examples
//!
//! ## Range Store
//!
//! ```
//! use rich_text_engine::{RangeStore, Selection, StyleRange, StyleToken};
//!
//! let mut store = RangeStore::with_text("Hello world", '\n');
//! store.add_span(StyleRange::new(StyleToken::Bold, 0, 2));
//! store.add_span(StyleRange::new(StyleToken::Bold, 2, 5));
//! assert_eq!(store.spans().len(), 1); // collapsed into 0..5
//!
//! // Typing at a range's start extends the range.
//! store.shift(Selection::caret(0), 2);
//! assert_eq!((store.spans()[0].start, store.spans()[0].end), (0, 7));
//!
//! // Typing before it moves the range along.
//! store.add_span(StyleRange::new(StyleToken::Italic, 9, 10));
//! store.shift(Selection::caret(8), 1);
//! assert_eq!((store.spans()[0].start, store.spans()[0].end), (0, 7));
//! assert_eq!((store.spans()[1].start, store.spans()[1].end), (10, 11));
//! ```
//!
//! ## Editing with Undo
//!
//! ```
//! use rich_text_engine::{EditorState, Selection, StyleToken};
//!
//! let state = EditorState::with_text("Hello")
//!     .with_selection(Selection::new(0, 5))
//!     .insert_style(&StyleToken::Italic)
//!     .with_selection(Selection::caret(5));
//!
//! // Text typed at the end of a range extends it.
//! let (state, changed) =
//!     state.apply_external_change("Hello world", Selection::caret(11), None);
//! assert!(changed);
//! assert_eq!(state.span_ranges()[0].end, 11);
//!
//! let state = state.undo().unwrap();
//! assert_eq!(state.text(), "Hello");
//! ```

mod edit;
mod range;
mod reconcile;
mod rope;
mod selection;
mod store;
mod style_edit;

pub use edit::EditorState;
pub use range::StyleRange;
pub use rope::RopeWrapper;
pub use selection::{Selection, intersecting, intersecting_tagged};
pub use store::RangeStore;
