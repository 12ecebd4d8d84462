//! Rope wrapper using the ropey crate.
//!
//! All positions are character offsets.

use ropey::Rope;

/// Wrapper around ropey::Rope with paragraph-aware helpers.
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create an empty rope.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Replace the entire contents.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Check whether the contents equal `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.rope == text
    }

    /// Character at a position, `None` past the end.
    #[must_use]
    pub fn char_at(&self, char_idx: usize) -> Option<char> {
        self.rope.get_char(char_idx)
    }

    /// First position of the paragraph containing `char_idx`: one past the
    /// last separator before it, or 0.
    #[must_use]
    pub fn start_of_paragraph(&self, char_idx: usize, separator: char) -> usize {
        let mut idx = char_idx.min(self.len_chars());
        let mut chars = self.rope.chars_at(idx);
        while let Some(ch) = chars.prev() {
            if ch == separator {
                return idx;
            }
            idx -= 1;
        }
        0
    }

    /// End of the paragraph containing `char_idx`: the position of the first
    /// separator at or after it, or the text length.
    #[must_use]
    pub fn end_of_paragraph(&self, char_idx: usize, separator: char) -> usize {
        let mut idx = char_idx.min(self.len_chars());
        for ch in self.rope.chars_at(idx) {
            if ch == separator {
                return idx;
            }
            idx += 1;
        }
        self.len_chars()
    }

    /// Check whether `text` equals these contents with one character inserted
    /// (`inserted = Some(ch)`) or removed (`inserted = None`) at `char_idx`.
    #[must_use]
    pub fn differs_by_one_at(&self, text: &str, char_idx: usize, inserted: Option<char>) -> bool {
        if char_idx > self.len_chars() {
            return false;
        }
        let before = self.rope.chars().take(char_idx);
        match inserted {
            Some(ch) => {
                let after = self.rope.chars_at(char_idx);
                text.chars()
                    .eq(before.chain(std::iter::once(ch)).chain(after))
            }
            None => {
                if char_idx >= self.len_chars() {
                    return false;
                }
                let after = self.rope.chars_at(char_idx + 1);
                text.chars().eq(before.chain(after))
            }
        }
    }

    /// Check whether `text` equals these contents with `[start, end)` cut out.
    #[must_use]
    pub fn matches_without(&self, text: &str, start: usize, end: usize) -> bool {
        if start > end || end > self.len_chars() {
            return false;
        }
        let before = self.rope.chars().take(start);
        let after = self.rope.chars_at(end);
        text.chars().eq(before.chain(after))
    }
}

impl From<&str> for RopeWrapper {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}
