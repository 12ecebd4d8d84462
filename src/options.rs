//! Editor configuration.

/// Minimum growth in characters since the last snapshot that records a new
/// history entry on a plain text edit.
pub const MIN_LENGTH_DIFFERENCE: usize = 10;

/// Default maximum number of snapshots to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Tunables for an [`EditorState`](crate::EditorState).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Text growth that forces a snapshot on an external edit.
    pub min_length_difference: usize,
    /// Maximum number of snapshots kept. Oldest entries are dropped when exceeded.
    pub max_history_depth: usize,
    /// Character that separates paragraphs.
    pub line_separator: char,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            min_length_difference: MIN_LENGTH_DIFFERENCE,
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
            line_separator: '\n',
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_min_length_difference(mut self, chars: usize) -> Self {
        self.min_length_difference = chars;
        self
    }

    /// Set the history depth; values below 1 are raised to 1 so the current
    /// state always has a snapshot.
    #[must_use]
    pub const fn with_max_history_depth(mut self, depth: usize) -> Self {
        self.max_history_depth = if depth == 0 { 1 } else { depth };
        self
    }

    #[must_use]
    pub const fn with_line_separator(mut self, separator: char) -> Self {
        self.line_separator = separator;
        self
    }
}
