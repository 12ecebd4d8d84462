//! Style tokens and their tag encoding.
//!
//! A [`StyleToken`] identifies a style kind plus an optional parameter. Every
//! token maps deterministically to a tag string of the form `Kind/parameter`
//! (`"Bold/"`, `"TextColor/#FF0000FF"`, `"TextSize/1.5"`). Tags are the
//! identity key used to match, collapse and remove ranges.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::color::{PackedRgba, Rgba};
use crate::error::{Error, Result};

/// Separator between the kind name and the parameter in a tag.
pub const TAG_SEPARATOR: char = '/';

/// How a style kind applies to text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Removes formatting instead of adding any.
    ClearFormat,
    /// Character-level span style.
    Text,
    /// Line-level paragraph style; paragraph styles exclude each other.
    Paragraph,
}

/// Relative font size, clamped to [`TextSize::MIN`]..=[`TextSize::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct TextSize(f32);

impl TextSize {
    pub const DEFAULT: f32 = 1.0;
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 2.0;

    /// Create a size, clamping out-of-range fractions. NaN maps to the default.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self(Self::DEFAULT);
        }
        Self(fraction.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub const fn fraction(self) -> f32 {
        self.0
    }
}

impl Default for TextSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

// Clamping rules out NaN and -0.0, so bitwise identity matches float equality.
impl Eq for TextSize {}

impl Hash for TextSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A style kind plus its parameter.
///
/// Built-in kinds are enum variants; kinds registered by the embedding
/// application use [`StyleToken::Custom`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleToken {
    ClearFormat,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    TextColor(PackedRgba),
    TextSize(TextSize),
    AlignLeft,
    AlignCenter,
    AlignRight,
    OrderedList,
    UnorderedList,
    Custom {
        kind: String,
        parameter: Option<String>,
    },
}

impl StyleToken {
    /// Text-color token.
    #[must_use]
    pub fn text_color(color: Rgba) -> Self {
        Self::TextColor(PackedRgba::from(color))
    }

    /// Text-size token; the fraction is clamped.
    #[must_use]
    pub fn text_size(fraction: f32) -> Self {
        Self::TextSize(TextSize::new(fraction))
    }

    /// Token for an application-defined kind.
    #[must_use]
    pub fn custom(kind: impl Into<String>, parameter: Option<String>) -> Self {
        Self::Custom {
            kind: kind.into(),
            parameter,
        }
    }

    /// Kind name, the part of the tag before the separator.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::ClearFormat => "ClearFormat",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::TextColor(_) => "TextColor",
            Self::TextSize(_) => "TextSize",
            Self::AlignLeft => "AlignLeft",
            Self::AlignCenter => "AlignCenter",
            Self::AlignRight => "AlignRight",
            Self::OrderedList => "OrderedList",
            Self::UnorderedList => "UnorderedList",
            Self::Custom { kind, .. } => kind,
        }
    }

    /// Encoded parameter, if the kind carries one.
    #[must_use]
    pub fn parameter(&self) -> Option<String> {
        match self {
            Self::TextColor(color) => Some(color.to_string()),
            Self::TextSize(size) => Some(size.to_string()),
            Self::Custom { parameter, .. } => parameter.clone(),
            _ => None,
        }
    }

    /// Full tag: kind, separator, parameter.
    #[must_use]
    pub fn tag(&self) -> String {
        let mut tag = self.base_tag();
        if let Some(parameter) = self.parameter() {
            tag.push_str(&parameter);
        }
        tag
    }

    /// Tag prefix shared by every parameter value of this kind.
    #[must_use]
    pub fn base_tag(&self) -> String {
        format!("{}{TAG_SEPARATOR}", self.kind_name())
    }

    /// Rebuild a token from a kind name and raw parameter.
    ///
    /// Built-in names decode into their variants; any other name becomes
    /// [`StyleToken::Custom`]. Whether the kind is registered is checked by
    /// [`StyleRegistry::from_tag`](crate::StyleRegistry::from_tag).
    pub fn from_parts(kind: &str, parameter: &str, tag: &str) -> Result<Self> {
        let token = match kind {
            "ClearFormat" => Self::ClearFormat,
            "Bold" => Self::Bold,
            "Italic" => Self::Italic,
            "Underline" => Self::Underline,
            "Strikethrough" => Self::Strikethrough,
            "AlignLeft" => Self::AlignLeft,
            "AlignCenter" => Self::AlignCenter,
            "AlignRight" => Self::AlignRight,
            "OrderedList" => Self::OrderedList,
            "UnorderedList" => Self::UnorderedList,
            "TextColor" => Self::TextColor(parameter.parse()?),
            "TextSize" => {
                let fraction = parameter
                    .parse::<f32>()
                    .map_err(|_| Error::InvalidStyleParameter {
                        tag: tag.to_string(),
                    })?;
                Self::text_size(fraction)
            }
            _ => Self::Custom {
                kind: kind.to_string(),
                parameter: (!parameter.is_empty()).then(|| parameter.to_string()),
            },
        };
        Ok(token)
    }
}

/// Split a tag into kind name and parameter.
#[must_use]
pub fn split_tag(tag: &str) -> Option<(&str, &str)> {
    tag.split_once(TAG_SEPARATOR)
        .filter(|(kind, _)| !kind.is_empty())
}
