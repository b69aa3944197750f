//! RGB color values used as palette swatches.

mod hex;

use std::fmt;

use palette::{Clamp, FromColor, Lab, LinSrgb, Srgb};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::ColorError;

/// Relative luminance at or below which a color counts as dark.
///
/// This is the luminance whose contrast against white equals its contrast
/// against black.
pub const DARK_LUMINANCE_THRESHOLD: f32 = 0.179_128_78; // (-0.1 + sqrt(0.21)) / 2

/// Slack allowed outside `[0, 1]` when converting from another color space.
///
/// Well under half an 8-bit step, so it only absorbs float round-off.
const GAMUT_TOLERANCE: f32 = 1.0e-4;

/// Opaque sRGB color with 8-bit channels.
///
/// Colors are immutable and compare by exact channel equality. The canonical
/// string form is `#RRGGBB` in uppercase, which is also what serde reads and
/// writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    /// Pure black.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Build a color from 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from integer channels, rejecting anything outside `0..=255`.
    pub fn try_from_rgb(red: i64, green: i64, blue: i64) -> Result<Self, ColorError> {
        let channel = |channel: &'static str, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
                channel,
                value: value as f64,
            })
        };
        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }

    /// Build a color from normalized `[0, 1]` channels.
    ///
    /// Non-finite or out-of-range inputs are rejected rather than clamped.
    pub fn try_from_unit(red: f32, green: f32, blue: f32) -> Result<Self, ColorError> {
        Self::checked_srgb(Srgb::new(red, green, blue), 0.0)
    }

    /// Build a color from a floating point sRGB value, rejecting out-of-gamut components.
    pub fn try_from_srgb(srgb: Srgb) -> Result<Self, ColorError> {
        Self::checked_srgb(srgb, 0.0)
    }

    /// Convert a CIELAB color, rejecting it when it falls outside the sRGB gamut.
    ///
    /// Float round-off just past either end of `[0, 1]` is accepted.
    pub fn try_from_lab(lab: Lab) -> Result<Self, ColorError> {
        Self::checked_srgb(Srgb::from_color(lab), GAMUT_TOLERANCE)
    }

    fn checked_srgb(srgb: Srgb, tolerance: f32) -> Result<Self, ColorError> {
        let check = |channel: &'static str, value: f32| {
            if value.is_finite() && (-tolerance..=1.0 + tolerance).contains(&value) {
                Ok(())
            } else {
                Err(ColorError::ChannelOutOfRange {
                    channel,
                    value: f64::from(value),
                })
            }
        };
        check("red", srgb.red)?;
        check("green", srgb.green)?;
        check("blue", srgb.blue)?;
        Ok(Self::from_srgb_clamped(srgb))
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        self.red
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        self.green
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Canonical `#RRGGBB` uppercase serialization.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f32 {
        let linear: LinSrgb = self.to_srgb().into_linear();
        0.0722f32.mul_add(
            linear.blue,
            0.2126f32.mul_add(linear.red, 0.7152 * linear.green),
        )
    }

    /// WCAG contrast ratio between two colors, from 1 to 21.
    pub fn contrast(self, other: Self) -> f32 {
        let a = self.relative_luminance() + 0.05;
        let b = other.relative_luminance() + 0.05;
        if a > b { a / b } else { b / a }
    }

    /// Whether the color reads as dark, i.e. light content has better contrast on it.
    pub fn is_dark(self) -> bool {
        self.relative_luminance() <= DARK_LUMINANCE_THRESHOLD
    }

    /// Floating point sRGB view of the color.
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(self.red, self.green, self.blue).into_format()
    }

    /// CIELAB (D65) view of the color.
    pub fn to_lab(self) -> Lab {
        Lab::from_color(self.to_srgb())
    }

    /// Quantize a floating point sRGB color, clamping out-of-gamut components.
    ///
    /// Gamut mapping for palette generation only; public constructors reject instead.
    pub(crate) fn from_srgb_clamped(srgb: Srgb) -> Self {
        let rgb: Srgb<u8> = srgb.clamp().into_format();
        Self::new(rgb.red, rgb.green, rgb.blue)
    }

    /// Map a CIELAB color into the sRGB gamut.
    pub(crate) fn from_lab_clamped(lab: Lab) -> Self {
        Self::from_srgb_clamped(Srgb::from_color(lab))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
