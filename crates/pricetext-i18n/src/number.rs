#![forbid(unsafe_code)]

//! Fixed-point decimal parsing and formatting.
//!
//! Values are parsed with single precision and formatted from the exact
//! binary value widened to `f64`, rounding half to even. This pins edge
//! cases such as `1.005` (stored slightly below, so it formats as `1.00`)
//! and `0.125` (an exact tie, so it formats as `0.12`).

/// Fraction digits shown for prices.
pub const PRICE_FRACTION_DIGITS: usize = 2;

/// A successfully parsed decimal literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedDecimal {
    /// The value at single precision. Always finite.
    pub value: f32,
    /// Number of digits written before the radix point in the literal.
    pub integer_digits: usize,
}

/// Parse a decimal literal, accepting `.` and `separator` as the radix point.
///
/// Surrounding whitespace is ignored. Returns `None` for empty input,
/// non-numeric input, and values that are not finite at single precision.
#[must_use]
pub fn parse_decimal(literal: &str, separator: char) -> Option<ParsedDecimal> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if separator != '.' && !trimmed.contains('.') {
        trimmed.replacen(separator, ".", 1)
    } else {
        trimmed.to_owned()
    };

    let value: f32 = normalized.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let integer_digits = normalized
        .trim_start_matches(['+', '-'])
        .chars()
        .take_while(char::is_ascii_digit)
        .count();

    Some(ParsedDecimal {
        value,
        integer_digits,
    })
}

/// Formatter for a fixed number of fraction digits.
///
/// Grouping is never applied; the integer part is zero padded up to
/// `min_integer_digits` (at least one digit is always written).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecimalFormat {
    separator: char,
    fraction_digits: usize,
    min_integer_digits: usize,
}

impl FixedDecimalFormat {
    /// Two fraction digits, one minimum integer digit.
    #[must_use]
    pub const fn new(separator: char) -> Self {
        Self {
            separator,
            fraction_digits: PRICE_FRACTION_DIGITS,
            min_integer_digits: 1,
        }
    }

    #[must_use]
    pub const fn fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self
    }

    #[must_use]
    pub const fn min_integer_digits(mut self, digits: usize) -> Self {
        self.min_integer_digits = if digits == 0 { 1 } else { digits };
        self
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Format `value` with the configured precision and separator.
    #[must_use]
    pub fn format(&self, value: f32) -> String {
        let fixed = format!("{:.*}", self.fraction_digits, f64::from(value));
        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let mut out = String::with_capacity(fixed.len() + self.min_integer_digits);
        out.push_str(sign);
        for _ in integer.len()..self.min_integer_digits {
            out.push('0');
        }
        out.push_str(integer);
        if self.fraction_digits > 0 {
            out.push(self.separator);
            out.push_str(fraction);
        }
        out
    }
}
