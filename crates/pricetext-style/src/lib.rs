#![forbid(unsafe_code)]

//! Style primitives for pricetext.
//!
//! # Role in pricetext
//! `pricetext-style` is the shared vocabulary for the visual properties a
//! price segment carries. Configuration, the attribute reader and the label
//! trait all speak these types, without pulling in any host toolkit.
//!
//! # This crate provides
//! - [`Color`], a packed ARGB color with hex literal parsing.
//! - [`FontStyle`], the weight/slant applied uniformly to all segments.

/// Packed ARGB colors and hex parsing.
pub mod color;
/// Font weight and slant.
pub mod font;

pub use color::{Color, ColorParseError};
pub use font::{FontStyle, FontStyleParseError};
