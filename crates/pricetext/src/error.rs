#![forbid(unsafe_code)]

use thiserror::Error;

/// Top-level error type for pricetext parsing helpers.
///
/// Formatting itself never fails; these come from parsing colors, font
/// styles, locale tags and dimensions supplied by a host.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Color(#[from] pricetext_style::ColorParseError),

    #[error(transparent)]
    FontStyle(#[from] pricetext_style::FontStyleParseError),

    #[error(transparent)]
    Locale(#[from] pricetext_i18n::LocaleError),

    #[error(transparent)]
    Dimension(#[from] pricetext_widgets::DimensionError),
}

/// Standard result type for pricetext APIs.
pub type Result<T> = std::result::Result<T, Error>;
