use tracing::trace;

use super::{Direction, FillSwatchFamily, ToggleDeltas};
use crate::{
    color::Color,
    design_system::DesignSystem,
    error::RecipeError,
    palette::Palette,
};

/// Select one swatch per state by stepping from `base_index`.
///
/// `base_index` is clamped first, then each state lands on
/// `base_index + direction * delta`, clamped to the palette. Offsets that
/// overshoot either end stick to that end.
pub fn select_family(
    palette: &Palette,
    base_index: usize,
    direction: Direction,
    deltas: &ToggleDeltas,
) -> FillSwatchFamily<Color> {
    let base = i64::try_from(base_index.min(palette.len() - 1)).unwrap_or(i64::MAX);
    let step = |delta: i32| palette.get(base.saturating_add(direction.sign() * i64::from(delta)));

    FillSwatchFamily {
        rest: step(deltas.rest),
        hover: step(deltas.hover),
        active: step(deltas.active),
        focus: step(deltas.focus),
    }
}

/// Neutral fill toggle resolved against a reference swatch.
///
/// The reference's closest palette index is the rest state; other states
/// move darker on light references and lighter on dark ones.
pub fn neutral_fill_toggle(
    palette: &Palette,
    reference: Color,
    deltas: &ToggleDeltas,
) -> FillSwatchFamily<Color> {
    let base_index = palette.closest_index_of(&reference);
    let direction = Direction::for_reference(reference);
    trace!(%reference, base_index, ?direction, "resolved neutral fill toggle");
    select_family(palette, base_index, direction, deltas)
}

/// Neutral fill toggle over the flat design-system object, as hex strings.
///
/// Parses the neutral palette and background, then defers to
/// [`neutral_fill_toggle`].
pub fn neutral_fill_toggle_legacy(
    design: &DesignSystem,
) -> Result<FillSwatchFamily<String>, RecipeError> {
    let palette = Palette::from_hex_swatches(design.neutral_palette.as_slice())?;
    let background = design
        .background_color
        .parse::<Color>()
        .map_err(RecipeError::Background)?;
    Ok(neutral_fill_toggle(&palette, background, &design.toggle_deltas()).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{ColorError, PaletteError},
        palette::PaletteConfig,
    };

    fn neutral() -> Palette {
        Palette::create(Color::new(0x80, 0x80, 0x80), &PaletteConfig::default())
    }

    #[test]
    fn rest_is_the_base_swatch() {
        let palette = neutral();
        let deltas = ToggleDeltas::new(8, -5, 0);
        for base in 0..palette.len() {
            for direction in [Direction::Lighter, Direction::Darker] {
                let family = select_family(&palette, base, direction, &deltas);
                assert_eq!(family.rest, palette.swatches()[base]);
                assert_eq!(family.focus, palette.swatches()[base]);
            }
        }
    }

    #[test]
    fn deltas_step_along_direction() {
        let palette = neutral();
        let deltas = ToggleDeltas::new(8, -5, 2);
        let family = select_family(&palette, 20, Direction::Darker, &deltas);
        assert_eq!(family.hover, palette.swatches()[28]);
        assert_eq!(family.active, palette.swatches()[15]);
        assert_eq!(family.focus, palette.swatches()[22]);

        let family = select_family(&palette, 20, Direction::Lighter, &deltas);
        assert_eq!(family.hover, palette.swatches()[12]);
        assert_eq!(family.active, palette.swatches()[25]);
    }

    #[test]
    fn huge_deltas_clamp_to_the_ends() {
        let palette = neutral();
        let first = palette.swatches()[0];
        let last = palette.swatches()[palette.len() - 1];
        let deltas = ToggleDeltas {
            rest: 0,
            hover: i32::MAX,
            active: i32::MIN,
            focus: 1_000,
        };
        for base in [0, palette.len() / 2, palette.len() - 1, usize::MAX] {
            let family = select_family(&palette, base, Direction::Darker, &deltas);
            assert_eq!(family.hover, last);
            assert_eq!(family.active, first);
            assert_eq!(family.focus, last);

            let family = select_family(&palette, base, Direction::Lighter, &deltas);
            assert_eq!(family.hover, first);
            assert_eq!(family.active, last);
        }
    }

    #[test]
    fn light_reference_steps_darker() {
        let palette = neutral();
        let family = neutral_fill_toggle(&palette, Color::WHITE, &ToggleDeltas::new(8, -5, 0));
        assert_eq!(family.rest, Color::WHITE);
        assert_eq!(family.hover, palette.swatches()[8]);
        assert_eq!(family.active, Color::WHITE);
    }

    #[test]
    fn dark_reference_steps_lighter() {
        let palette = neutral();
        let last = palette.len() - 1;
        let family = neutral_fill_toggle(&palette, Color::BLACK, &ToggleDeltas::new(8, -5, 0));
        assert_eq!(family.rest, Color::BLACK);
        assert_eq!(family.hover, palette.swatches()[last - 8]);
        assert_eq!(family.active, Color::BLACK);
    }

    #[test]
    fn legacy_matches_typed_form() {
        let design = DesignSystem::default();
        let palette = neutral();
        let legacy = neutral_fill_toggle_legacy(&design).unwrap();
        let typed = neutral_fill_toggle(&palette, Color::WHITE, &design.toggle_deltas());
        assert_eq!(legacy, typed.to_hex());
    }

    #[test]
    fn legacy_rejects_malformed_background() {
        let design = DesignSystem::default().with_background_color("#12345");
        let err = neutral_fill_toggle_legacy(&design).unwrap_err();
        assert!(matches!(
            err,
            RecipeError::Background(ColorError::InvalidHex { .. })
        ));
    }

    #[test]
    fn legacy_rejects_malformed_palette() {
        let mut design = DesignSystem::default();
        design.neutral_palette[3] = "grey".into();
        assert!(matches!(
            neutral_fill_toggle_legacy(&design),
            Err(RecipeError::Palette(PaletteError::Color(_)))
        ));

        design.neutral_palette.clear();
        assert_eq!(
            neutral_fill_toggle_legacy(&design),
            Err(RecipeError::Palette(PaletteError::Empty))
        );
    }
}
