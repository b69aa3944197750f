//! Flat design-system configuration consumed by the legacy recipe call shape.

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    palette::{Palette, PaletteConfig},
    recipes::ToggleDeltas,
};

/// Base color of the library's default neutral palette.
pub const NEUTRAL_BASE_COLOR: Color = Color::new(0x80, 0x80, 0x80);
/// Default hover offset of the neutral fill toggle.
pub const DEFAULT_TOGGLE_HOVER_DELTA: i32 = 8;
/// Default active offset of the neutral fill toggle.
pub const DEFAULT_TOGGLE_ACTIVE_DELTA: i32 = -5;
/// Default focus offset of the neutral fill toggle.
pub const DEFAULT_TOGGLE_FOCUS_DELTA: i32 = 0;

/// Legacy configuration object: every color as a hex string, every knob flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    /// Surface the recipe is evaluated against.
    pub background_color: String,
    /// Neutral swatches, lightest first.
    pub neutral_palette: Vec<String>,
    /// Hover offset.
    pub neutral_fill_toggle_hover_delta: i32,
    /// Active offset.
    pub neutral_fill_toggle_active_delta: i32,
    /// Focus offset.
    pub neutral_fill_toggle_focus_delta: i32,
}

impl DesignSystem {
    /// Build a design system whose neutral palette is `palette`.
    ///
    /// The background defaults to the palette's lightest swatch.
    pub fn from_palette(palette: &Palette, deltas: ToggleDeltas) -> Self {
        let neutral_palette: Vec<String> = palette.swatches().iter().map(|c| c.to_hex()).collect();
        Self {
            background_color: neutral_palette[0].clone(),
            neutral_palette,
            neutral_fill_toggle_hover_delta: deltas.hover,
            neutral_fill_toggle_active_delta: deltas.active,
            neutral_fill_toggle_focus_delta: deltas.focus,
        }
    }

    /// Same configuration evaluated against another background.
    #[must_use]
    pub fn with_background_color(&self, background: impl Into<String>) -> Self {
        Self {
            background_color: background.into(),
            ..self.clone()
        }
    }

    /// Toggle deltas with the rest state on the background swatch.
    pub const fn toggle_deltas(&self) -> ToggleDeltas {
        ToggleDeltas::new(
            self.neutral_fill_toggle_hover_delta,
            self.neutral_fill_toggle_active_delta,
            self.neutral_fill_toggle_focus_delta,
        )
    }
}

impl Default for DesignSystem {
    fn default() -> Self {
        let palette = Palette::create(NEUTRAL_BASE_COLOR, &PaletteConfig::default());
        Self::from_palette(
            &palette,
            ToggleDeltas::new(
                DEFAULT_TOGGLE_HOVER_DELTA,
                DEFAULT_TOGGLE_ACTIVE_DELTA,
                DEFAULT_TOGGLE_FOCUS_DELTA,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEFAULT_STEPS;

    #[test]
    fn defaults_use_neutral_palette() {
        let design = DesignSystem::default();
        assert_eq!(design.neutral_palette.len(), DEFAULT_STEPS);
        assert_eq!(design.background_color, "#FFFFFF");
        assert_eq!(design.toggle_deltas(), ToggleDeltas::new(8, -5, 0));
    }

    #[test]
    fn background_override_keeps_everything_else() {
        let design = DesignSystem::default();
        let dark = design.with_background_color("#000000");
        assert_eq!(dark.background_color, "#000000");
        assert_eq!(dark.neutral_palette, design.neutral_palette);
        assert_eq!(dark.toggle_deltas(), design.toggle_deltas());
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_value(DesignSystem::default()).unwrap();
        assert!(json.get("backgroundColor").is_some());
        assert_eq!(json["neutralFillToggleHoverDelta"], 8);
        assert_eq!(json["neutralPalette"].as_array().map(Vec::len), Some(DEFAULT_STEPS));
    }
}
