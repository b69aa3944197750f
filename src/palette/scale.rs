#![forbid(unsafe_code)]

use palette::{Lab, Mix};

use super::{PaletteConfig, SwatchGenerator};
use crate::color::Color;

/// CIELAB scale running white -> seed -> black.
///
/// The seed sits at position `1 - L*/100` so a mid-lightness seed lands near
/// the middle of the palette and light seeds sit close to the white end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabScale {
    config: PaletteConfig,
    light: Color,
    dark: Color,
}

impl LabScale {
    /// Scale between pure white and pure black.
    #[must_use]
    pub const fn new(config: PaletteConfig) -> Self {
        Self::with_extremes(config, Color::WHITE, Color::BLACK)
    }

    /// Scale between custom light and dark extremes.
    #[must_use]
    pub const fn with_extremes(config: PaletteConfig, light: Color, dark: Color) -> Self {
        Self {
            config,
            light,
            dark,
        }
    }

    #[inline]
    fn seed_position(seed: Lab) -> f32 {
        (1.0 - seed.l / 100.0).clamp(0.0, 1.0)
    }

    /// Color at scale position `t` in `[0, 1]`.
    fn sample(light: Lab, seed: Lab, dark: Lab, seed_at: f32, t: f32) -> Lab {
        if seed_at > 0.0 && t <= seed_at {
            light.mix(seed, t / seed_at)
        } else if seed_at < 1.0 {
            seed.mix(dark, (t - seed_at) / (1.0 - seed_at))
        } else {
            seed
        }
    }
}

impl SwatchGenerator for LabScale {
    fn generate(&self, seed: Color) -> Vec<Color> {
        let (light, dark, seed) = (self.light.to_lab(), self.dark.to_lab(), seed.to_lab());
        let seed_at = Self::seed_position(seed);

        let start = self.config.clip_light();
        let span = 1.0 - self.config.clip_light() - self.config.clip_dark();
        let last = self.config.steps() - 1;

        (0..=last)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = span.mul_add(i as f32 / last as f32, start);
                Color::from_lab_clamped(Self::sample(light, seed, dark, seed_at, t))
            })
            .collect()
    }
}
