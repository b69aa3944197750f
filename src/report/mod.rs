//! Evaluated recipe tables and their HTML / JSON renderings.

mod html;
mod json_io;

pub use html::write_html_grid;
pub use json_io::save_rows_json;

use serde::Serialize;

use crate::{
    color::Color,
    palette::Palette,
    recipes::{FillSwatchFamily, ToggleDeltas, neutral_fill_toggle},
};

/// Neutral fill toggle evaluated against one reference swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleRow {
    /// Index of the reference swatch in the palette.
    pub index: usize,
    /// Reference swatch.
    pub reference: Color,
    /// Recipe output.
    #[serde(flatten)]
    pub family: FillSwatchFamily<Color>,
}

/// Evaluate the neutral fill toggle with every swatch as the reference.
#[must_use]
pub fn toggle_rows(palette: &Palette, deltas: &ToggleDeltas) -> Vec<ToggleRow> {
    palette
        .swatches()
        .iter()
        .enumerate()
        .map(|(index, &reference)| ToggleRow {
            index,
            reference,
            family: neutral_fill_toggle(palette, reference, deltas),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteConfig;

    #[test]
    fn one_row_per_swatch() {
        let palette = Palette::create(Color::new(0x80, 0x80, 0x80), &PaletteConfig::default());
        let rows = toggle_rows(&palette, &ToggleDeltas::new(8, -5, 0));
        assert_eq!(rows.len(), palette.len());
        for row in &rows {
            assert_eq!(row.family.rest, row.reference);
        }
    }

    #[test]
    fn rows_serialize_flat() {
        let palette = Palette::from_swatches(vec![Color::WHITE, Color::BLACK]).unwrap();
        let rows = toggle_rows(&palette, &ToggleDeltas::new(1, 0, 0));
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["reference"], "#FFFFFF");
        assert_eq!(json[0]["hover"], "#000000");
        assert_eq!(json[1]["hover"], "#FFFFFF");
    }
}
