//! Hex string parsing for [`Color`].

use std::str::FromStr;

use palette::Srgb;

use super::Color;
use crate::error::ColorError;

/// Parses `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`, in any letter case.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }

        let invalid = |reason: String| ColorError::InvalidHex {
            input: input.to_owned(),
            reason,
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected only hexadecimal digits".into()));
        }
        if digits.len() != 3 && digits.len() != 6 {
            return Err(invalid(format!(
                "expected 3 or 6 digits (got {})",
                digits.len()
            )));
        }

        let rgb = Srgb::<u8>::from_str(digits).map_err(|err| invalid(err.to_string()))?;
        Ok(Self::new(rgb.red, rgb.green, rgb.blue))
    }
}
