#![forbid(unsafe_code)]

//! Three-segment price text.
//!
//! A price is shown as a row of three labels: the integer digits, the
//! decimal separator with the fraction digits, and a suffix symbol such as a
//! currency or unit. Each segment carries its own size and color; all three
//! share one font style.
//!
//! # Example
//!
//! ```
//! use pricetext_i18n::Locale;
//! use pricetext_widgets::{PriceTextConfig, PriceTextView, TextLabel};
//!
//! let config = PriceTextConfig::new()
//!     .text("1234.5")
//!     .suffix_symbol("€")
//!     .decimal_size_percentage(50);
//! let view = PriceTextView::new(config, Locale::root(), TextLabel::new(), TextLabel::new(), TextLabel::new());
//!
//! assert_eq!(view.integer().text(), "1234");
//! assert_eq!(view.decimal().text(), ".50");
//! assert_eq!(view.suffix().text(), "€");
//! assert_eq!(view.decimal().text_size(), 24.0);
//! ```

use std::fmt;

use pricetext_i18n::{FixedDecimalFormat, Locale, parse_decimal};
use pricetext_style::{Color, FontStyle};

use crate::config::PriceTextConfig;
use crate::label::{Label, ReadLabel};

/// The three display strings of a formatted price.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceParts {
    pub integer: String,
    /// Separator followed by the fraction digits, e.g. `,50`.
    pub decimal: String,
    pub suffix: String,
}

/// Split `value` into display segments using the locale's decimal separator.
///
/// Unparsable input (missing, empty, non-numeric or non-finite) is shown as
/// the zero placeholder `00<sep>00` rather than reported as an error.
#[must_use]
pub fn format_price(value: Option<&str>, suffix: Option<&str>, locale: &Locale) -> PriceParts {
    let separator = locale.decimal_separator();

    let Some(parsed) = value.and_then(|v| parse_decimal(v, separator)) else {
        tracing::debug!(
            value = value.unwrap_or_default(),
            "unparsable price, showing zero placeholder"
        );
        let placeholder = format!("00{separator}00");
        return format_price(Some(&placeholder), suffix, locale);
    };

    let formatted = FixedDecimalFormat::new(separator)
        .min_integer_digits(parsed.integer_digits)
        .format(parsed.value);
    let (integer, decimal) = formatted
        .split_once(separator)
        .unwrap_or((formatted.as_str(), ""));

    PriceParts {
        integer: integer.to_owned(),
        decimal: decimal_text(decimal, separator),
        suffix: suffix_text(suffix),
    }
}

/// With two fraction digits always written, the empty-digits case cannot
/// occur; the whitespace rule only matters for a formatter without them.
fn decimal_text(digits: &str, separator: char) -> String {
    if digits.is_empty() && separator.is_whitespace() {
        String::new()
    } else {
        format!("{separator}{digits}")
    }
}

fn suffix_text(suffix: Option<&str>) -> String {
    suffix.unwrap_or_default().to_owned()
}

/// A price shown across three labels laid out in a row.
#[derive(Debug, Clone)]
pub struct PriceTextView<L: Label> {
    integer: L,
    decimal: L,
    suffix: L,
    locale: Locale,
    parts: PriceParts,
}

impl<L: Label> PriceTextView<L> {
    /// Build the view and push the configuration onto the labels.
    ///
    /// Labels receive, in order: font style, text sizes, colors, text.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(config: PriceTextConfig, locale: Locale, integer: L, decimal: L, suffix: L) -> Self {
        let _span = tracing::debug_span!(
            "price_text_view",
            text = config.text.as_deref().unwrap_or_default(),
            locale = %locale,
        )
        .entered();

        let mut view = Self {
            integer,
            decimal,
            suffix,
            locale,
            parts: PriceParts::default(),
        };

        view.apply_font_style(config.font_style);

        let decimal_px = config.decimal_text_size_px();
        let suffix_px = config.suffix_text_size_px();
        tracing::debug!(
            integer_px = config.text_size_px,
            decimal_px,
            suffix_px,
            "price text sizes"
        );
        view.integer.set_text_size(config.text_size_px as f32);
        view.decimal.set_text_size(decimal_px as f32);
        view.suffix.set_text_size(suffix_px as f32);

        view.set_text_colors(
            config.primary_color,
            config.resolved_secondary_color(),
            config.resolved_suffix_color(),
        );

        view.set_price(config.text.as_deref(), config.suffix_symbol.as_deref());
        view
    }

    /// Color all three segments with `primary`.
    pub fn set_text_color(&mut self, primary: Color) {
        self.set_text_colors(primary, primary, primary);
    }

    /// Color each segment. Sizes and text are left untouched.
    pub fn set_text_colors(&mut self, primary: Color, secondary: Color, suffix: Color) {
        self.integer.set_text_color(primary);
        self.decimal.set_text_color(secondary);
        self.suffix.set_text_color(suffix);
    }

    /// Reformat and display a new price. Sizes and colors are left untouched.
    pub fn set_price(&mut self, value: Option<&str>, suffix: Option<&str>) {
        let parts = format_price(value, suffix, &self.locale);
        self.integer.set_text(&parts.integer);
        self.decimal.set_text(&parts.decimal);
        self.suffix.set_text(&parts.suffix);
        self.parts = parts;
    }

    fn apply_font_style(&mut self, style: FontStyle) {
        for label in [&mut self.integer, &mut self.decimal, &mut self.suffix] {
            label.set_font_style(style);
        }
    }

    #[must_use]
    pub fn integer(&self) -> &L {
        &self.integer
    }

    #[must_use]
    pub fn decimal(&self) -> &L {
        &self.decimal
    }

    #[must_use]
    pub fn suffix(&self) -> &L {
        &self.suffix
    }

    /// Labels in row order: integer, decimal, suffix.
    #[must_use]
    pub fn labels(&self) -> [&L; 3] {
        [&self.integer, &self.decimal, &self.suffix]
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Strings most recently pushed onto the labels.
    #[must_use]
    pub fn parts(&self) -> &PriceParts {
        &self.parts
    }

    #[must_use]
    pub fn into_labels(self) -> (L, L, L) {
        (self.integer, self.decimal, self.suffix)
    }
}

/// The row as plain text, segments in display order.
impl<L: ReadLabel> fmt::Display for PriceTextView<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in self.labels() {
            f.write_str(label.text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::TextLabel;

    fn dot() -> Locale {
        Locale::root()
    }

    fn comma() -> Locale {
        Locale::parse("de-DE").unwrap()
    }

    fn parts(integer: &str, decimal: &str, suffix: &str) -> PriceParts {
        PriceParts {
            integer: integer.into(),
            decimal: decimal.into(),
            suffix: suffix.into(),
        }
    }

    fn view(config: PriceTextConfig, locale: Locale) -> PriceTextView<TextLabel> {
        PriceTextView::new(
            config,
            locale,
            TextLabel::new(),
            TextLabel::new(),
            TextLabel::new(),
        )
    }

    #[test]
    fn formats_with_two_fraction_digits() {
        assert_eq!(
            format_price(Some("1234.5"), Some("€"), &dot()),
            parts("1234", ".50", "€")
        );
        assert_eq!(format_price(Some("7"), None, &dot()), parts("7", ".00", ""));
        assert_eq!(
            format_price(Some("-3.456"), None, &dot()),
            parts("-3", ".46", "")
        );
    }

    #[test]
    fn rounding_is_pinned() {
        assert_eq!(format_price(Some("1.005"), None, &dot()).decimal, ".00");
        assert_eq!(format_price(Some("0.125"), None, &dot()).decimal, ".12");
        assert_eq!(format_price(Some("0.995"), None, &dot()), parts("1", ".00", ""));
    }

    #[test]
    fn comma_locale_uses_comma() {
        assert_eq!(
            format_price(Some("1234.5"), Some("kr"), &comma()),
            parts("1234", ",50", "kr")
        );
        assert_eq!(
            format_price(Some("1234,5"), None, &comma()),
            parts("1234", ",50", "")
        );
    }

    #[test]
    fn unparsable_input_renders_zero_placeholder() {
        for value in [None, Some(""), Some("abc"), Some("NaN"), Some("1.2.3")] {
            assert_eq!(format_price(value, None, &dot()), parts("00", ".00", ""));
            assert_eq!(
                format_price(value, Some("kg"), &comma()),
                parts("00", ",00", "kg")
            );
        }
    }

    #[test]
    fn placeholder_equals_formatting_the_placeholder_literal() {
        let locale = comma();
        assert_eq!(
            format_price(Some("oops"), Some("€"), &locale),
            format_price(Some("00,00"), Some("€"), &locale)
        );
    }

    #[test]
    fn suffix_empty_or_missing_is_blank() {
        assert_eq!(format_price(Some("1"), None, &dot()).suffix, "");
        assert_eq!(format_price(Some("1"), Some(""), &dot()).suffix, "");
        assert_eq!(format_price(Some("1"), Some("kg"), &dot()).suffix, "kg");
    }

    #[test]
    fn whitespace_separator_still_shows_digits() {
        let locale = Locale::root().with_decimal_separator(' ');
        assert_eq!(
            format_price(Some("12 5"), None, &locale),
            parts("12", " 50", "")
        );
        assert_eq!(decimal_text("", ' '), "");
        assert_eq!(decimal_text("", ','), ",");
    }

    #[test]
    fn construction_applies_style_sizes_colors_and_text() {
        let config = PriceTextConfig::new()
            .text("1234.5")
            .suffix_symbol("€")
            .text_size_px(48)
            .decimal_size_percentage(50)
            .font_style(FontStyle::Bold)
            .primary_color(Color::BLACK)
            .secondary_color(Color::RED);
        let v = view(config, dot());

        assert_eq!(v.integer().text(), "1234");
        assert_eq!(v.decimal().text(), ".50");
        assert_eq!(v.suffix().text(), "€");

        assert_eq!(v.integer().text_size(), 48.0);
        assert_eq!(v.decimal().text_size(), 24.0);
        assert_eq!(v.suffix().text_size(), 48.0);

        assert_eq!(v.integer().color(), Color::BLACK);
        assert_eq!(v.decimal().color(), Color::RED);
        assert_eq!(v.suffix().color(), Color::BLACK);

        for label in v.labels() {
            assert_eq!(label.font_style(), FontStyle::Bold);
        }
        assert_eq!(v.to_string(), "1234.50€");
    }

    #[test]
    fn nonzero_suffix_percentage_uses_decimal_size() {
        let config = PriceTextConfig::new()
            .text_size_px(48)
            .decimal_size_percentage(75)
            .suffix_size_percentage(50);
        let v = view(config, dot());
        assert_eq!(v.suffix().text_size(), 36.0);
        assert_ne!(v.suffix().text_size(), 24.0);
    }

    #[test]
    fn default_config_shows_gray_placeholder() {
        let v = view(PriceTextConfig::default(), dot());
        assert_eq!(v.to_string(), "00.00");
        for label in v.labels() {
            assert_eq!(label.color(), Color::GRAY);
            assert_eq!(label.text_size(), 48.0);
        }
    }

    #[test]
    fn set_text_color_only_touches_colors() {
        let config = PriceTextConfig::new()
            .text("9.99")
            .decimal_size_percentage(50);
        let mut v = view(config, dot());
        let before: Vec<(String, f32)> = v
            .labels()
            .iter()
            .map(|l| (l.text().to_owned(), l.text_size()))
            .collect();

        v.set_text_color(Color::BLUE);
        for label in v.labels() {
            assert_eq!(label.color(), Color::BLUE);
        }

        v.set_text_colors(Color::RED, Color::GREEN, Color::WHITE);
        assert_eq!(v.integer().color(), Color::RED);
        assert_eq!(v.decimal().color(), Color::GREEN);
        assert_eq!(v.suffix().color(), Color::WHITE);

        let after: Vec<(String, f32)> = v
            .labels()
            .iter()
            .map(|l| (l.text().to_owned(), l.text_size()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn set_price_updates_text_and_parts() {
        let mut v = view(PriceTextConfig::new().text("1"), comma());
        v.set_price(Some("42.424"), Some("$"));
        assert_eq!(v.parts(), &parts("42", ",42", "$"));
        assert_eq!(v.to_string(), "42,42$");

        let (integer, decimal, suffix) = v.into_labels();
        assert_eq!(
            (integer.text(), decimal.text(), suffix.text()),
            ("42", ",42", "$")
        );
    }

    #[test]
    fn borrowed_labels_are_written_through() {
        let mut labels = [TextLabel::new(), TextLabel::new(), TextLabel::new()];
        let [a, b, c] = &mut labels;
        let v = PriceTextView::new(PriceTextConfig::new().text("5.5"), dot(), a, b, c);
        assert_eq!(v.locale(), &dot());
        drop(v);
        assert_eq!(labels[0].text(), "5");
        assert_eq!(labels[1].text(), ".50");
    }
}
