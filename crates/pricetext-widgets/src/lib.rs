#![forbid(unsafe_code)]

//! Price text widget for pricetext.
//!
//! [`PriceTextView`] renders a monetary value as three labels (integer
//! digits, separator plus fraction digits, suffix symbol) with independent
//! sizes and colors. Labels are abstract: hosts implement [`Label`] for
//! their own text widgets, and [`TextLabel`] serves as an in-memory one.

pub mod config;
pub mod label;
pub mod price_text;

pub use config::{
    Attributes, Dimension, DimensionError, DimensionUnit, DisplayMetrics, PriceTextConfig, attr,
};
pub use label::{Label, ReadLabel, TextLabel};
pub use price_text::{PriceParts, PriceTextView, format_price};
