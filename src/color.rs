//! RGBA colors for text-color styles.
//!
//! This module provides two color representations:
//!
//! - [`Rgba`]: floating-point components, handed to the rendering layer
//! - [`PackedRgba`]: 8-bit-per-channel packed value, hashable and encodable in
//!   a style tag (`TextColor/#RRGGBBAA`)
//!
//! # Examples
//!
//! ```
//! use rich_text_engine::color::{PackedRgba, Rgba};
//!
//! let custom = Rgba::from_hex("#1a1a2e").unwrap();
//! let packed = PackedRgba::from(custom);
//! assert_eq!(packed.to_string(), "#1A1A2EFF");
//! assert_eq!(Rgba::from(packed).to_rgb_u8(), (0x1a, 0x1a, 0x2e));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Opaque red.
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque green.
    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque blue.
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from u8 RGB components.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let channel = |idx: usize, width: usize| {
            u8::from_str_radix(digits.get(idx * width..(idx + 1) * width)?, 16).ok()
        };

        match digits.len() {
            // Short form repeats each digit.
            3 => Some(Self::from_rgb_u8(
                channel(0, 1)? * 17,
                channel(1, 1)? * 17,
                channel(2, 1)? * 17,
            )),
            6 => Some(Self::from_rgb_u8(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Some(Self::from_rgba_u8(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    /// Return a new color with the specified alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }

    /// Convert to u8 RGB tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to u8 RGBA tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgba_u8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb_u8();
        let a = (self.a * 255.0).round().clamp(0.0, 255.0) as u8;
        (r, g, b, a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PackedRgba::from(*self))
    }
}

/// Color quantized to 8 bits per channel, packed as `0xRRGGBBAA`.
///
/// Unlike [`Rgba`] this is `Eq + Hash`, so it can live inside a
/// [`StyleToken`](crate::StyleToken) and round-trip through a tag string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Pack u8 RGBA components.
    #[must_use]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Unpack into u8 RGBA components.
    #[must_use]
    pub const fn to_rgba_u8(self) -> (u8, u8, u8, u8) {
        (
            (self.0 >> 24) as u8,
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        )
    }
}

impl From<Rgba> for PackedRgba {
    fn from(color: Rgba) -> Self {
        let (r, g, b, a) = color.to_rgba_u8();
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl From<PackedRgba> for Rgba {
    fn from(color: PackedRgba) -> Self {
        let (r, g, b, a) = color.to_rgba_u8();
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl fmt::Display for PackedRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for PackedRgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::from_hex(s)
            .map(Self::from)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}
