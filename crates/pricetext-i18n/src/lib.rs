#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for pricetext.
//!
//! Provides locale identifiers with fallback chains, decimal separator
//! lookup, and fixed-point number parsing/formatting.
//!
//! # Role in pricetext
//! `pricetext-i18n` isolates locale concerns so the price widget stays
//! deterministic: the locale is always an explicit value, never ambient
//! process state.
//!
//! # How it fits in the system
//! `pricetext-widgets` resolves the decimal separator here and formats the
//! price with [`FixedDecimalFormat`] before splitting it into segments. This
//! crate does not depend on style or widget code.

pub mod locale;
pub mod number;

pub use locale::{Locale, LocaleError, ROOT_DECIMAL_SEPARATOR};
pub use number::{FixedDecimalFormat, PRICE_FRACTION_DIGITS, ParsedDecimal, parse_decimal};
