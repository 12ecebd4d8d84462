//! Style kind table: class, render attributes and tag decoding.
//!
//! The registry is the configuration object an editor is built with. It is
//! passed explicitly (usually behind an `Arc`) so independent editors can use
//! different style sets side by side.
//!
//! # Examples
//!
//! ```
//! use rich_text_engine::{Rgba, SpanAttributes, StyleKind, StyleRegistry, StyleToken};
//!
//! let registry = StyleRegistry::default()
//!     .with_kind(StyleKind::text("Highlight", SpanAttributes::NONE.with_bg(Rgba::GREEN)));
//!
//! let token = registry.from_tag("Highlight/").unwrap();
//! assert_eq!(token, StyleToken::custom("Highlight", None));
//! assert!(registry.span_attributes(&token).is_some());
//! ```

use std::collections::HashMap;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::style::{ListMarker, ParagraphAttributes, SpanAttributes, TextAlign};
use crate::token::{StyleClass, StyleToken, split_tag};

/// One registered style kind.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleKind {
    name: String,
    class: StyleClass,
    span: Option<SpanAttributes>,
    paragraph: Option<ParagraphAttributes>,
}

impl StyleKind {
    /// Character-level kind painted with `attributes`.
    #[must_use]
    pub fn text(name: impl Into<String>, attributes: SpanAttributes) -> Self {
        Self {
            name: name.into(),
            class: StyleClass::Text,
            span: Some(attributes),
            paragraph: None,
        }
    }

    /// Line-level kind painted with `attributes`.
    #[must_use]
    pub fn paragraph(name: impl Into<String>, attributes: ParagraphAttributes) -> Self {
        Self {
            name: name.into(),
            class: StyleClass::Paragraph,
            span: None,
            paragraph: Some(attributes),
        }
    }

    /// Formatting-removal kind.
    #[must_use]
    pub fn clear_format(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: StyleClass::ClearFormat,
            span: None,
            paragraph: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn class(&self) -> StyleClass {
        self.class
    }
}

/// Table of style kinds keyed by kind name.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRegistry {
    kinds: HashMap<String, StyleKind>,
}

impl Default for StyleRegistry {
    /// Registry with every built-in kind.
    fn default() -> Self {
        let builtins = [
            StyleKind::clear_format("ClearFormat"),
            StyleKind::text("Bold", SpanAttributes::bold()),
            StyleKind::text("Italic", SpanAttributes::italic()),
            StyleKind::text("Underline", SpanAttributes::underline()),
            StyleKind::text("Strikethrough", SpanAttributes::strikethrough()),
            StyleKind::text("TextColor", SpanAttributes::NONE),
            StyleKind::text("TextSize", SpanAttributes::NONE),
            StyleKind::paragraph("AlignLeft", ParagraphAttributes::aligned(TextAlign::Left)),
            StyleKind::paragraph(
                "AlignCenter",
                ParagraphAttributes::aligned(TextAlign::Center),
            ),
            StyleKind::paragraph("AlignRight", ParagraphAttributes::aligned(TextAlign::Right)),
            StyleKind::paragraph("OrderedList", ParagraphAttributes::list(ListMarker::Ordered)),
            StyleKind::paragraph(
                "UnorderedList",
                ParagraphAttributes::list(ListMarker::Unordered),
            ),
        ];

        let mut registry = Self::empty();
        for kind in builtins {
            registry.register(kind);
        }
        registry
    }
}

impl StyleRegistry {
    /// Registry without any kinds.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Add or replace a kind, returning the previous definition.
    pub fn register(&mut self, kind: StyleKind) -> Option<StyleKind> {
        self.kinds.insert(kind.name.clone(), kind)
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_kind(mut self, kind: StyleKind) -> Self {
        self.register(kind);
        self
    }

    /// Look up a kind by name.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<&StyleKind> {
        self.kinds.get(name)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Class of the token's kind, `None` if the kind is not registered.
    #[must_use]
    pub fn class_of(&self, token: &StyleToken) -> Option<StyleClass> {
        self.kind(token.kind_name()).map(StyleKind::class)
    }

    /// Decode a tag into a token.
    ///
    /// Fails with [`Error::UnknownStyleTag`] when the tag is malformed or its
    /// kind is not registered, and with a parameter error when the kind is
    /// known but its parameter does not decode.
    pub fn from_tag(&self, tag: &str) -> Result<StyleToken> {
        let (kind, parameter) =
            split_tag(tag).ok_or_else(|| Error::UnknownStyleTag(tag.to_string()))?;
        if !self.kinds.contains_key(kind) {
            return Err(Error::UnknownStyleTag(tag.to_string()));
        }
        StyleToken::from_parts(kind, parameter, tag)
    }

    /// Character-level attributes for a token, if its kind is a text kind.
    #[must_use]
    pub fn span_attributes(&self, token: &StyleToken) -> Option<SpanAttributes> {
        let kind = self.kind(token.kind_name())?;
        let base = kind.span?;
        let attributes = match token {
            StyleToken::TextColor(color) => base.with_fg(Rgba::from(*color)),
            StyleToken::TextSize(size) => base.merge(SpanAttributes::scaled(size.fraction())),
            _ => base,
        };
        Some(attributes)
    }

    /// Line-level attributes for a token, if its kind is a paragraph kind.
    #[must_use]
    pub fn paragraph_attributes(&self, token: &StyleToken) -> Option<ParagraphAttributes> {
        self.kind(token.kind_name())?.paragraph
    }
}
