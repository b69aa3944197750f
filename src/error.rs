//! Error types shared by the color, palette and recipe layers.

use thiserror::Error;

/// Errors raised while building or parsing a [`crate::color::Color`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input string was empty (after trimming an optional `#`).
    #[error("empty color string")]
    Empty,
    /// The input string is not a `#RGB` or `#RRGGBB` hex color.
    #[error("invalid hex color `{input}`: {reason}")]
    InvalidHex {
        /// Offending input, verbatim.
        input: String,
        /// Human readable cause.
        reason: String,
    },
    /// A channel value falls outside the range accepted by the constructor.
    #[error("{channel} channel out of range: {value}")]
    ChannelOutOfRange {
        /// Channel name (`red`, `green` or `blue`).
        channel: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Errors raised while configuring or assembling a [`crate::palette::Palette`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Generated palettes need both a light and a dark extreme.
    #[error("palette needs at least {min} steps (got {got})")]
    TooFewSteps {
        /// Smallest accepted step count.
        min: usize,
        /// Requested step count.
        got: usize,
    },
    /// Clip amounts must stay in `[0, 0.5)` and leave part of the scale.
    #[error("invalid clip (light {light}, dark {dark})")]
    InvalidClip {
        /// Fraction trimmed from the light end.
        light: f32,
        /// Fraction trimmed from the dark end.
        dark: f32,
    },
    /// A palette cannot be built from zero swatches.
    #[error("palette has no swatches")]
    Empty,
    /// One of the supplied swatches failed to parse.
    #[error("invalid swatch: {0}")]
    Color(#[from] ColorError),
}

/// Errors raised by recipe evaluation through the legacy configuration shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    /// The design system's background color is malformed.
    #[error("invalid background color")]
    Background(#[source] ColorError),
    /// The design system's neutral palette is malformed.
    #[error("invalid neutral palette")]
    Palette(#[from] PaletteError),
}
