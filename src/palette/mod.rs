//! Discrete swatch scales derived from a single seed color.

mod scale;

pub use scale::LabScale;

use crate::{color::Color, error::PaletteError};

/// Swatch count of the default neutral palette.
pub const DEFAULT_STEPS: usize = 63;
/// Smallest palette that still has a distinct light and dark extreme.
pub const MIN_STEPS: usize = 2;

/// Deterministic seed to swatch sequence function.
///
/// Implementations must return the same sequence for the same seed, ordered
/// from the lightest swatch to the darkest.
pub trait SwatchGenerator {
    /// Produce the ordered swatches anchored at `seed`.
    fn generate(&self, seed: Color) -> Vec<Color>;
}

/// Shape of a generated palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteConfig {
    steps: usize,
    clip_light: f32,
    clip_dark: f32,
}

impl PaletteConfig {
    /// Validate and build a palette configuration.
    ///
    /// `clip_light` and `clip_dark` trim that fraction of the white and black
    /// ends of the scale before sampling.
    pub fn new(steps: usize, clip_light: f32, clip_dark: f32) -> Result<Self, PaletteError> {
        if steps < MIN_STEPS {
            return Err(PaletteError::TooFewSteps {
                min: MIN_STEPS,
                got: steps,
            });
        }
        let valid_clip = |clip: f32| clip.is_finite() && (0.0..0.5).contains(&clip);
        if !valid_clip(clip_light) || !valid_clip(clip_dark) {
            return Err(PaletteError::InvalidClip {
                light: clip_light,
                dark: clip_dark,
            });
        }
        Ok(Self {
            steps,
            clip_light,
            clip_dark,
        })
    }

    /// Number of swatches in generated palettes.
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Fraction trimmed from the light end.
    pub const fn clip_light(&self) -> f32 {
        self.clip_light
    }

    /// Fraction trimmed from the dark end.
    pub const fn clip_dark(&self) -> f32 {
        self.clip_dark
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            clip_light: 0.0,
            clip_dark: 0.0,
        }
    }
}

/// Ordered, non-empty sequence of swatches.
///
/// Index 0 is the lightest swatch. Lookups outside the valid range clamp to
/// the nearest end so recipes stay total over any delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Color>,
}

impl Palette {
    /// Generate a palette from `seed` with the default [`LabScale`] generator.
    pub fn create(seed: Color, config: &PaletteConfig) -> Self {
        Self {
            swatches: LabScale::new(*config).generate(seed),
        }
    }

    /// Generate a palette from `seed` with a custom generator.
    pub fn from_generator<G>(seed: Color, generator: &G) -> Result<Self, PaletteError>
    where
        G: SwatchGenerator + ?Sized,
    {
        Self::from_swatches(generator.generate(seed))
    }

    /// Wrap an existing swatch sequence.
    pub fn from_swatches(swatches: Vec<Color>) -> Result<Self, PaletteError> {
        if swatches.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { swatches })
    }

    /// Parse a sequence of hex strings into a palette.
    pub fn from_hex_swatches<S: AsRef<str>>(hexes: &[S]) -> Result<Self, PaletteError> {
        let swatches = hexes
            .iter()
            .map(|hex| hex.as_ref().parse::<Color>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_swatches(swatches)
    }

    /// All swatches, lightest first.
    pub fn swatches(&self) -> &[Color] {
        &self.swatches
    }

    /// Number of swatches.
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Clamp an arbitrary signed index into `[0, len - 1]`.
    pub fn clamp_index(&self, index: i64) -> usize {
        let last = self.swatches.len() - 1;
        usize::try_from(index.max(0)).map_or(last, |index| index.min(last))
    }

    /// Swatch at `index`, clamped to the nearest valid index.
    pub fn get(&self, index: i64) -> Color {
        self.swatches[self.clamp_index(index)]
    }

    /// Index of `reference` in the palette.
    ///
    /// Exact matches win; otherwise the swatch with the nearest relative
    /// luminance is chosen, the lighter one on ties.
    pub fn closest_index_of(&self, reference: &Color) -> usize {
        if let Some(index) = self.swatches.iter().position(|swatch| swatch == reference) {
            return index;
        }

        let target = reference.relative_luminance();
        let mut best = 0;
        let mut best_distance = f32::INFINITY;
        for (index, swatch) in self.swatches.iter().enumerate() {
            let distance = (swatch.relative_luminance() - target).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEUTRAL: Color = Color::new(0x80, 0x80, 0x80);

    struct Fixed(Vec<Color>);

    impl SwatchGenerator for Fixed {
        fn generate(&self, _seed: Color) -> Vec<Color> {
            self.0.clone()
        }
    }

    #[test]
    fn config_rejects_degenerate_shapes() {
        assert_eq!(
            PaletteConfig::new(1, 0.0, 0.0),
            Err(PaletteError::TooFewSteps { min: 2, got: 1 })
        );
        assert!(PaletteConfig::new(10, 0.5, 0.0).is_err());
        assert!(PaletteConfig::new(10, 0.0, -0.1).is_err());
        assert!(PaletteConfig::new(10, f32::NAN, 0.0).is_err());
        assert!(PaletteConfig::new(10, 0.2, 0.3).is_ok());
    }

    #[test]
    fn length_is_constant_across_seeds() {
        let config = PaletteConfig::default();
        for seed in [NEUTRAL, Color::WHITE, Color::BLACK, Color::new(0x00, 0x66, 0xcc)] {
            assert_eq!(Palette::create(seed, &config).len(), DEFAULT_STEPS);
        }
        let small = PaletteConfig::new(5, 0.0, 0.0).unwrap();
        assert_eq!(Palette::create(NEUTRAL, &small).len(), 5);
    }

    #[test]
    fn generation_is_deterministic() {
        let config = PaletteConfig::new(40, 0.1, 0.05).unwrap();
        let seed = Color::new(0x3a, 0x7b, 0x1f);
        assert_eq!(Palette::create(seed, &config), Palette::create(seed, &config));
    }

    #[test]
    fn get_clamps_out_of_range_indices() {
        let palette = Palette::create(NEUTRAL, &PaletteConfig::default());
        let last = palette.swatches()[palette.len() - 1];
        assert_eq!(palette.get(-1), palette.swatches()[0]);
        assert_eq!(palette.get(i64::MIN), palette.swatches()[0]);
        assert_eq!(palette.get(10_000), last);
        assert_eq!(palette.get(i64::MAX), last);
        assert_eq!(palette.clamp_index(7), 7);
    }

    #[test]
    fn closest_index_prefers_exact_match() {
        let palette = Palette::create(NEUTRAL, &PaletteConfig::default());
        for (index, swatch) in palette.swatches().iter().enumerate() {
            let found = palette.closest_index_of(swatch);
            assert_eq!(palette.swatches()[found], *swatch);
            assert!(found <= index);
        }
    }

    #[test]
    fn closest_index_falls_back_to_luminance() {
        let palette = Palette::from_swatches(vec![
            Color::WHITE,
            Color::new(0x80, 0x80, 0x80),
            Color::BLACK,
        ])
        .unwrap();
        assert_eq!(palette.closest_index_of(&Color::new(0xf0, 0xf0, 0xf0)), 0);
        assert_eq!(palette.closest_index_of(&Color::new(0x88, 0x80, 0x80)), 1);
        assert_eq!(palette.closest_index_of(&Color::new(0x10, 0x10, 0x10)), 2);
    }

    #[test]
    fn custom_generators_plug_in() {
        let generator = Fixed(vec![Color::WHITE, Color::BLACK]);
        let palette = Palette::from_generator(NEUTRAL, &generator).unwrap();
        assert_eq!(palette.swatches(), &[Color::WHITE, Color::BLACK]);

        let empty = Fixed(Vec::new());
        assert_eq!(
            Palette::from_generator(NEUTRAL, &empty),
            Err(PaletteError::Empty)
        );
    }

    #[test]
    fn hex_swatches_propagate_parse_errors() {
        let palette = Palette::from_hex_swatches(&["#FFFFFF", "#000000"]).unwrap();
        assert_eq!(palette.len(), 2);

        let err = Palette::from_hex_swatches(&["#FFFFFF", "nope"]).unwrap_err();
        assert!(matches!(err, PaletteError::Color(_)));
        assert_eq!(
            Palette::from_hex_swatches::<&str>(&[]),
            Err(PaletteError::Empty)
        );
    }
}
