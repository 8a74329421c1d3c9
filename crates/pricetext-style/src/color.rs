#![forbid(unsafe_code)]

//! Packed 32-bit ARGB colors.
//!
//! [`Color`] stores alpha in the high byte followed by red, green and blue,
//! which is the layout host toolkits use for integer color values. Hex
//! literals are accepted in the four resource forms:
//!
//! | form        | example     | alpha |
//! |-------------|-------------|-------|
//! | `#RGB`      | `#f80`      | `ff`  |
//! | `#ARGB`     | `#8f80`     | given |
//! | `#RRGGBB`   | `#ff8800`   | `ff`  |
//! | `#AARRGGBB` | `#80ff8800` | given |
//!
//! Short forms expand each nibble by duplication (`#f80` is `#ffff8800`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a hex color literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color literal is empty")]
    Empty,

    #[error("color literal must start with '#': {literal:?}")]
    MissingHash { literal: String },

    #[error("color literal has {len} hex digits, expected 3, 4, 6 or 8")]
    InvalidLength { len: usize },

    #[error("invalid hex digit {digit:?} in color literal")]
    InvalidDigit { digit: char },
}

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Mid gray, the default price text color.
    pub const GRAY: Self = Self(0xFF80_8080);
    pub const RED: Self = Self(0xFFFF_0000);
    pub const GREEN: Self = Self(0xFF00_FF00);
    pub const BLUE: Self = Self(0xFF00_00FF);

    /// Wrap a packed `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    #[inline]
    #[must_use]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Opaque color from RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    #[inline]
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Same RGB channels with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::argb(a, self.r(), self.g(), self.b())
    }

    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a() == 0xFF
    }

    /// Parse a hex literal (see the module docs for accepted forms).
    pub fn parse(literal: &str) -> Result<Self, ColorParseError> {
        let literal = literal.trim();
        if literal.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let Some(digits) = literal.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash {
                literal: literal.to_owned(),
            });
        };

        let mut nibbles = Vec::with_capacity(8);
        for ch in digits.chars() {
            let value = ch
                .to_digit(16)
                .ok_or(ColorParseError::InvalidDigit { digit: ch })?;
            nibbles.push(value);
        }

        let expanded: Vec<u32> = match nibbles.len() {
            3 => std::iter::once(0xF)
                .chain(nibbles)
                .flat_map(|n| [n, n])
                .collect(),
            4 => nibbles.into_iter().flat_map(|n| [n, n]).collect(),
            6 => [0xF, 0xF].into_iter().chain(nibbles).collect(),
            8 => nibbles,
            len => return Err(ColorParseError::InvalidLength { len }),
        };

        Ok(Self(expanded.into_iter().fold(0, |acc, n| (acc << 4) | n)))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GRAY
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats as `#AARRGGBB` in lowercase.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        Self::parse(&literal).map_err(serde::de::Error::custom)
    }
}
