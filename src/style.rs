//! Renderable attributes attached to style kinds.
//!
//! The range engine never interprets these; they are what the rendering
//! collaborator paints for a range:
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, strikethrough
//! - [`SpanAttributes`]: Character-level attributes (flags, color, size scale)
//! - [`ParagraphAttributes`]: Line-level attributes (alignment, list marker)
//!
//! # Examples
//!
//! ```
//! use rich_text_engine::{Rgba, SpanAttributes};
//!
//! let emphasis = SpanAttributes::bold().with_italic();
//! let colored = SpanAttributes::fg(Rgba::RED);
//!
//! // Merge attributes (overlay takes precedence for colors and scale)
//! let combined = emphasis.merge(colored);
//! assert_eq!(combined.fg, Some(Rgba::RED));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Character decoration flags.
    ///
    /// Flags can be combined using bitwise OR.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold weight.
        const BOLD          = 0x01;
        /// Italic slant.
        const ITALIC        = 0x02;
        /// Underlined text.
        const UNDERLINE     = 0x04;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x08;
    }
}

/// Character-level attributes of a span range.
///
/// `None` fields mean "inherit from the surrounding text".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpanAttributes {
    /// Foreground color.
    pub fg: Option<Rgba>,
    /// Background color.
    pub bg: Option<Rgba>,
    /// Decoration flags.
    pub attributes: TextAttributes,
    /// Font size relative to the base size (1.0 = unchanged).
    pub scale: Option<f32>,
}

impl SpanAttributes {
    /// No colors, flags, or scale.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
        scale: None,
    };

    /// Attributes with only a foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..Self::NONE
        }
    }

    /// Attributes with only a size scale.
    #[must_use]
    pub const fn scaled(scale: f32) -> Self {
        Self {
            scale: Some(scale),
            ..Self::NONE
        }
    }

    /// Bold attributes.
    #[must_use]
    pub const fn bold() -> Self {
        Self::flags(TextAttributes::BOLD)
    }

    /// Italic attributes.
    #[must_use]
    pub const fn italic() -> Self {
        Self::flags(TextAttributes::ITALIC)
    }

    /// Underline attributes.
    #[must_use]
    pub const fn underline() -> Self {
        Self::flags(TextAttributes::UNDERLINE)
    }

    /// Strikethrough attributes.
    #[must_use]
    pub const fn strikethrough() -> Self {
        Self::flags(TextAttributes::STRIKETHROUGH)
    }

    /// Attributes with only the given flags.
    #[must_use]
    pub const fn flags(attributes: TextAttributes) -> Self {
        Self {
            attributes,
            ..Self::NONE
        }
    }

    /// Return new attributes with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return new attributes with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return new attributes with the italic flag added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::ITALIC),
            ..self
        }
    }

    /// Check if nothing is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty() && self.scale.is_none()
    }

    /// Merge two attribute sets, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
            scale: other.scale.or(self.scale),
        }
    }
}

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Marker drawn in front of each line of a list paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListMarker {
    /// Numbered items.
    Ordered,
    /// Bulleted items.
    Unordered,
}

/// Line-level attributes of a paragraph range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParagraphAttributes {
    pub align: Option<TextAlign>,
    pub list: Option<ListMarker>,
}

impl ParagraphAttributes {
    /// Aligned paragraph.
    #[must_use]
    pub const fn aligned(align: TextAlign) -> Self {
        Self {
            align: Some(align),
            list: None,
        }
    }

    /// List paragraph.
    #[must_use]
    pub const fn list(marker: ListMarker) -> Self {
        Self {
            align: None,
            list: Some(marker),
        }
    }
}
