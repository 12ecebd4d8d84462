//! `rich_text_engine` - style range engine for rich-text editors
//!
//! Keeps a plain text buffer together with character-level span ranges and
//! line-level paragraph ranges, reconciles them with external text edits, and
//! provides snapshot-based undo/redo.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional color channel casts
#![allow(clippy::cast_sign_loss)] // Intentional color channel conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::cast_possible_wrap)] // Character counts fit in isize
#![allow(clippy::module_name_repetitions)] // Allow StyleRange, RangeStore etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod color;
pub mod error;
pub mod history;
pub mod options;
pub mod registry;
pub mod style;
pub mod text;
pub mod token;

// Re-export core types at crate root
pub use color::{PackedRgba, Rgba};
pub use error::{Error, Result};
pub use history::{History, RangeSnapshot, Snapshot};
pub use options::{DEFAULT_MAX_HISTORY_DEPTH, EditorOptions, MIN_LENGTH_DIFFERENCE};
pub use registry::{StyleKind, StyleRegistry};
pub use style::{ListMarker, ParagraphAttributes, SpanAttributes, TextAlign, TextAttributes};
pub use token::{StyleClass, StyleToken, TAG_SEPARATOR, TextSize};

// Re-export editing types
pub use text::{EditorState, RangeStore, RopeWrapper, Selection, StyleRange};
