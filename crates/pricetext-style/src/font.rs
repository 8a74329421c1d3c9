#![forbid(unsafe_code)]

//! Font weight/slant selection shared by all price segments.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a font style name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown font style {value:?}, expected normal, bold, italic or bold|italic")]
pub struct FontStyleParseError {
    pub value: String,
}

/// Typeface style applied to a label.
///
/// The discriminants match the integer style flags hosts use in attribute
/// declarations: bit 0 is bold, bit 1 is italic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FontStyle {
    #[default]
    Normal = 0,
    Bold = 1,
    Italic = 2,
    BoldItalic = 3,
}

impl FontStyle {
    const BOLD_BIT: i32 = 0b01;
    const ITALIC_BIT: i32 = 0b10;

    /// Map raw style flags to a style. Bits other than bold/italic are ignored.
    #[must_use]
    pub const fn from_bits(bits: i32) -> Self {
        match bits & (Self::BOLD_BIT | Self::ITALIC_BIT) {
            1 => Self::Bold,
            2 => Self::Italic,
            3 => Self::BoldItalic,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn bits(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn is_bold(self) -> bool {
        self.bits() & Self::BOLD_BIT != 0
    }

    #[must_use]
    pub const fn is_italic(self) -> bool {
        self.bits() & Self::ITALIC_BIT != 0
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold|italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts flag syntax (`bold|italic`, in any order), the kebab-case name
/// `bold-italic`, or the raw integer flags `0..=3`.
impl FromStr for FontStyle {
    type Err = FontStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || FontStyleParseError {
            value: s.to_owned(),
        };

        if let Ok(bits) = trimmed.parse::<i32>() {
            return if (0..=3).contains(&bits) {
                Ok(Self::from_bits(bits))
            } else {
                Err(err())
            };
        }
        if trimmed.eq_ignore_ascii_case("bold-italic") {
            return Ok(Self::BoldItalic);
        }

        let mut bits = 0;
        for flag in trimmed.split('|').map(str::trim) {
            bits |= match flag.to_ascii_lowercase().as_str() {
                "normal" => 0,
                "bold" => Self::BOLD_BIT,
                "italic" => Self::ITALIC_BIT,
                _ => return Err(err()),
            };
        }
        Ok(Self::from_bits(bits))
    }
}
