#![forbid(unsafe_code)]

//! Price widget configuration.
//!
//! [`PriceTextConfig`] is the typed configuration a host builds directly.
//! [`Attributes`] is a string key-value bag for hosts that declare widgets
//! in markup; [`PriceTextConfig::from_attributes`] reads it, falling back to
//! the documented default for any attribute that is missing or malformed.
//!
//! # Attribute keys
//!
//! | key                  | value                                  | default         |
//! |----------------------|----------------------------------------|-----------------|
//! | `text`               | numeric literal                        | none            |
//! | `suffixSymbol`       | any string                             | none            |
//! | `textSize`           | dimension (`48px`, `16dp`, `12sp`, ..) | `48` px         |
//! | `textPercentage`     | integer, decimal size in %             | `100`           |
//! | `suffixSymbolSize`   | integer, `0` means unset               | `0`             |
//! | `textStyle`          | `normal`, `bold`, `italic`, both       | `normal`        |
//! | `textColor`          | hex color                              | `#ff808080`     |
//! | `secondaryTextColor` | hex color                              | `textColor`     |
//! | `suffixSymbolColor`  | hex color                              | `textColor`     |

use std::fmt;
use std::str::FromStr;

use pricetext_style::{Color, FontStyle};
use thiserror::Error;

/// Attribute key names.
pub mod attr {
    pub const TEXT: &str = "text";
    pub const SUFFIX_SYMBOL: &str = "suffixSymbol";
    pub const TEXT_SIZE: &str = "textSize";
    pub const TEXT_PERCENTAGE: &str = "textPercentage";
    pub const SUFFIX_SYMBOL_SIZE: &str = "suffixSymbolSize";
    pub const TEXT_STYLE: &str = "textStyle";
    pub const TEXT_COLOR: &str = "textColor";
    pub const SECONDARY_TEXT_COLOR: &str = "secondaryTextColor";
    pub const SUFFIX_SYMBOL_COLOR: &str = "suffixSymbolColor";
}

pub const DEFAULT_TEXT_SIZE_PX: i32 = 48;
pub const DEFAULT_DECIMAL_SIZE_PERCENTAGE: i32 = 100;
/// `0` leaves the suffix at the integer text size.
pub const DEFAULT_SUFFIX_SIZE_PERCENTAGE: i32 = 0;
pub const DEFAULT_PRIMARY_COLOR: Color = Color::GRAY;

// ── Dimensions ───────────────────────────────────────────────────────

/// Error returned when a dimension literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("dimension literal is empty")]
    Empty,

    #[error("invalid dimension value {value:?}")]
    InvalidValue { value: String },

    #[error("unknown dimension unit {unit:?}")]
    UnknownUnit { unit: String },
}

/// Unit of a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionUnit {
    Px,
    /// Density-independent pixels.
    Dp,
    /// Scale-independent pixels (density times the user font scale).
    Sp,
    /// Points, 1/72 inch.
    Pt,
    In,
    Mm,
}

/// Screen metrics used to turn dimensions into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub density: f32,
    pub scaled_density: f32,
    /// Physical pixels per inch along the x axis.
    pub xdpi: f32,
}

impl DisplayMetrics {
    #[must_use]
    pub const fn new(density: f32, scaled_density: f32, xdpi: f32) -> Self {
        Self {
            density,
            scaled_density,
            xdpi,
        }
    }
}

/// Baseline density: one dp is one pixel.
impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0, 1.0, 160.0)
    }
}

/// A length with a unit, e.g. `16dp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: DimensionUnit,
}

impl Dimension {
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: DimensionUnit::Px,
        }
    }

    #[must_use]
    pub const fn dp(value: f32) -> Self {
        Self {
            value,
            unit: DimensionUnit::Dp,
        }
    }

    #[must_use]
    pub const fn sp(value: f32) -> Self {
        Self {
            value,
            unit: DimensionUnit::Sp,
        }
    }

    /// Exact size in (fractional) pixels.
    #[must_use]
    pub fn to_px(self, metrics: &DisplayMetrics) -> f32 {
        match self.unit {
            DimensionUnit::Px => self.value,
            DimensionUnit::Dp => self.value * metrics.density,
            DimensionUnit::Sp => self.value * metrics.scaled_density,
            DimensionUnit::Pt => self.value * metrics.xdpi / 72.0,
            DimensionUnit::In => self.value * metrics.xdpi,
            DimensionUnit::Mm => self.value * metrics.xdpi / 25.4,
        }
    }

    /// Whole pixel size: rounded half away from zero, and a nonzero
    /// dimension never collapses to zero pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixel_size(self, metrics: &DisplayMetrics) -> i32 {
        let px = self.to_px(metrics);
        let rounded = px.round() as i32;
        if rounded != 0 || self.value == 0.0 {
            rounded
        } else if self.value > 0.0 {
            1
        } else {
            -1
        }
    }
}

/// A bare number is taken as pixels.
impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DimensionError::Empty);
        }
        let split = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);

        let unit = match unit.to_ascii_lowercase().as_str() {
            "" | "px" => DimensionUnit::Px,
            "dp" | "dip" => DimensionUnit::Dp,
            "sp" => DimensionUnit::Sp,
            "pt" => DimensionUnit::Pt,
            "in" => DimensionUnit::In,
            "mm" => DimensionUnit::Mm,
            _ => {
                return Err(DimensionError::UnknownUnit {
                    unit: unit.to_owned(),
                });
            }
        };
        let value: f32 = number
            .trim()
            .parse()
            .ok()
            .filter(|v: &f32| v.is_finite())
            .ok_or_else(|| DimensionError::InvalidValue {
                value: number.to_owned(),
            })?;

        Ok(Self { value, unit })
    }
}

// ── Attribute bag ────────────────────────────────────────────────────

/// Ordered string attributes as declared by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut attrs = Self::new();
        for (key, value) in pairs {
            attrs.set(key, value);
        }
        attrs
    }

    /// Insert or replace an attribute, keeping first-insertion order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse an attribute, logging and discarding malformed values.
    fn parse_with<T, E>(&self, key: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Option<T>
    where
        E: fmt::Display,
    {
        let raw = self.get(key)?;
        match parse(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(
                    attribute = key,
                    value = raw,
                    error = %err,
                    "malformed attribute, using default"
                );
                None
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

// ── Configuration ────────────────────────────────────────────────────

/// Configuration for a [`PriceTextView`](crate::PriceTextView).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PriceTextConfig {
    /// Numeric literal to display.
    pub text: Option<String>,
    pub suffix_symbol: Option<String>,
    /// Integer segment size in pixels.
    pub text_size_px: i32,
    /// Decimal segment size as a percentage of `text_size_px`.
    pub decimal_size_percentage: i32,
    /// `0` keeps the suffix at `text_size_px`; any other value switches it to
    /// the decimal size.
    pub suffix_size_percentage: i32,
    pub font_style: FontStyle,
    pub primary_color: Color,
    /// Decimal segment color; the primary color when unset.
    pub secondary_color: Option<Color>,
    /// Suffix segment color; the primary color when unset.
    pub suffix_color: Option<Color>,
}

impl Default for PriceTextConfig {
    fn default() -> Self {
        Self {
            text: None,
            suffix_symbol: None,
            text_size_px: DEFAULT_TEXT_SIZE_PX,
            decimal_size_percentage: DEFAULT_DECIMAL_SIZE_PERCENTAGE,
            suffix_size_percentage: DEFAULT_SUFFIX_SIZE_PERCENTAGE,
            font_style: FontStyle::Normal,
            primary_color: DEFAULT_PRIMARY_COLOR,
            secondary_color: None,
            suffix_color: None,
        }
    }
}

impl PriceTextConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn suffix_symbol(mut self, suffix: impl Into<String>) -> Self {
        self.suffix_symbol = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn text_size_px(mut self, px: i32) -> Self {
        self.text_size_px = px;
        self
    }

    #[must_use]
    pub fn decimal_size_percentage(mut self, percentage: i32) -> Self {
        self.decimal_size_percentage = percentage;
        self
    }

    #[must_use]
    pub fn suffix_size_percentage(mut self, percentage: i32) -> Self {
        self.suffix_size_percentage = percentage;
        self
    }

    #[must_use]
    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    #[must_use]
    pub fn primary_color(mut self, color: Color) -> Self {
        self.primary_color = color;
        self
    }

    #[must_use]
    pub fn secondary_color(mut self, color: Color) -> Self {
        self.secondary_color = Some(color);
        self
    }

    #[must_use]
    pub fn suffix_color(mut self, color: Color) -> Self {
        self.suffix_color = Some(color);
        self
    }

    /// `text_size_px * decimal_size_percentage / 100`, truncated toward zero.
    #[must_use]
    pub fn decimal_text_size_px(&self) -> i32 {
        let scaled =
            i64::from(self.text_size_px) * i64::from(self.decimal_size_percentage) / 100;
        i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX })
    }

    /// Suffix size: the integer size while the suffix percentage is unset,
    /// the decimal size otherwise. The percentage itself is never applied.
    #[must_use]
    pub fn suffix_text_size_px(&self) -> i32 {
        if self.suffix_size_percentage == 0 {
            self.text_size_px
        } else {
            self.decimal_text_size_px()
        }
    }

    #[must_use]
    pub fn resolved_secondary_color(&self) -> Color {
        self.secondary_color.unwrap_or(self.primary_color)
    }

    #[must_use]
    pub fn resolved_suffix_color(&self) -> Color {
        self.suffix_color.unwrap_or(self.primary_color)
    }

    /// Read configuration from declared attributes.
    ///
    /// Missing attributes take their defaults. Malformed ones take their
    /// defaults too and emit a warning; this never fails.
    #[must_use]
    pub fn from_attributes(attrs: &Attributes, metrics: &DisplayMetrics) -> Self {
        let defaults = Self::default();
        let primary_color = attrs
            .parse_with(attr::TEXT_COLOR, Color::parse)
            .unwrap_or(defaults.primary_color);

        Self {
            text: attrs.get(attr::TEXT).map(str::to_owned),
            suffix_symbol: attrs.get(attr::SUFFIX_SYMBOL).map(str::to_owned),
            text_size_px: attrs
                .parse_with(attr::TEXT_SIZE, str::parse::<Dimension>)
                .map_or(defaults.text_size_px, |d| d.to_pixel_size(metrics)),
            decimal_size_percentage: attrs
                .parse_with(attr::TEXT_PERCENTAGE, |v| v.trim().parse::<i32>())
                .unwrap_or(defaults.decimal_size_percentage),
            suffix_size_percentage: attrs
                .parse_with(attr::SUFFIX_SYMBOL_SIZE, |v| v.trim().parse::<i32>())
                .unwrap_or(defaults.suffix_size_percentage),
            font_style: attrs
                .parse_with(attr::TEXT_STYLE, str::parse::<FontStyle>)
                .unwrap_or(defaults.font_style),
            primary_color,
            secondary_color: attrs.parse_with(attr::SECONDARY_TEXT_COLOR, Color::parse),
            suffix_color: attrs.parse_with(attr::SUFFIX_SYMBOL_COLOR, Color::parse),
        }
    }
}
