#![forbid(unsafe_code)]

//! pricetext public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports
//! common types from the internal crates and offers a prelude for
//! day-to-day usage.

// --- Style re-exports ------------------------------------------------------

pub use pricetext_style::{Color, ColorParseError, FontStyle, FontStyleParseError};

// --- i18n re-exports -------------------------------------------------------

pub use pricetext_i18n::{FixedDecimalFormat, Locale, LocaleError};

// --- Widget re-exports -----------------------------------------------------

pub use pricetext_widgets::{
    Attributes, Dimension, DimensionError, DisplayMetrics, Label, PriceParts, PriceTextConfig,
    PriceTextView, ReadLabel, TextLabel, attr, format_price,
};

mod error;

pub use error::{Error, Result};

/// Build a view over in-memory [`TextLabel`]s.
#[must_use]
pub fn text_view(config: PriceTextConfig, locale: Locale) -> PriceTextView<TextLabel> {
    PriceTextView::new(
        config,
        locale,
        TextLabel::new(),
        TextLabel::new(),
        TextLabel::new(),
    )
}

pub mod prelude {
    pub use crate::{
        Color, FontStyle, Label, Locale, PriceParts, PriceTextConfig, PriceTextView, TextLabel,
        format_price, text_view,
    };
}
