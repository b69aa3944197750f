//! Application-level configuration loading, including the neutral palette and toggle deltas.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};
use validator::{Validate, ValidationError};

use crate::{
    color::Color,
    design_system::{
        DEFAULT_TOGGLE_ACTIVE_DELTA, DEFAULT_TOGGLE_FOCUS_DELTA, DEFAULT_TOGGLE_HOVER_DELTA,
        DesignSystem, NEUTRAL_BASE_COLOR,
    },
    error::PaletteError,
    palette::{DEFAULT_STEPS, Palette, PaletteConfig},
    recipes::ToggleDeltas,
};

/// Default location on disk where the tool looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/design-system.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SWATCH_RECIPES_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq)]
/// Immutable design-system defaults, passed explicitly to whoever needs them.
pub struct AppConfig {
    neutral_base_color: Color,
    palette: PaletteConfig,
    deltas: ToggleDeltas,
}

impl AppConfig {
    /// Load the configuration from disk, falling back to the built-in defaults.
    pub fn load() -> Self {
        Self::load_from(resolve_config_path())
    }

    /// Load the configuration from `path`, falling back to the built-in defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        base = %app_config.neutral_base_color,
                        steps = app_config.palette.steps(),
                        "loaded design system config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "invalid config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_json::from_str(contents)?;
        raw.validate()?;
        Ok(raw.try_into()?)
    }

    /// Override the neutral base color (e.g. from the command line).
    #[must_use]
    pub fn with_neutral_base_color(self, neutral_base_color: Color) -> Self {
        Self {
            neutral_base_color,
            ..self
        }
    }

    /// Seed of the neutral palette.
    pub fn neutral_base_color(&self) -> Color {
        self.neutral_base_color
    }

    /// Shape of generated palettes.
    pub fn palette_config(&self) -> &PaletteConfig {
        &self.palette
    }

    /// Neutral fill toggle offsets.
    pub fn toggle_deltas(&self) -> ToggleDeltas {
        self.deltas
    }

    /// Generate the neutral palette.
    pub fn neutral_palette(&self) -> Palette {
        Palette::create(self.neutral_base_color, &self.palette)
    }

    /// Flat design-system object matching this configuration.
    pub fn design_system(&self) -> DesignSystem {
        DesignSystem::from_palette(&self.neutral_palette(), self.deltas)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            neutral_base_color: NEUTRAL_BASE_COLOR,
            palette: PaletteConfig::default(),
            deltas: ToggleDeltas::new(
                DEFAULT_TOGGLE_HOVER_DELTA,
                DEFAULT_TOGGLE_ACTIVE_DELTA,
                DEFAULT_TOGGLE_FOCUS_DELTA,
            ),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[validate(custom(function = "validate_hex_color"))]
    neutral_base_color: String,
    #[validate(range(min = 2, max = 1024))]
    steps: usize,
    #[validate(range(min = 0.0, exclusive_max = 0.5))]
    clip_light: f32,
    #[validate(range(min = 0.0, exclusive_max = 0.5))]
    clip_dark: f32,
    hover_delta: i32,
    active_delta: i32,
    focus_delta: i32,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            neutral_base_color: NEUTRAL_BASE_COLOR.to_hex(),
            steps: DEFAULT_STEPS,
            clip_light: 0.0,
            clip_dark: 0.0,
            hover_delta: DEFAULT_TOGGLE_HOVER_DELTA,
            active_delta: DEFAULT_TOGGLE_ACTIVE_DELTA,
            focus_delta: DEFAULT_TOGGLE_FOCUS_DELTA,
        }
    }
}

impl TryFrom<RawConfig> for AppConfig {
    type Error = PaletteError;

    fn try_from(value: RawConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            neutral_base_color: value.neutral_base_color.parse()?,
            palette: PaletteConfig::new(value.steps, value.clip_light, value.clip_dark)?,
            deltas: ToggleDeltas::new(value.hover_delta, value.active_delta, value.focus_delta),
        })
    }
}

/// Validates that a string is a `#RGB` or `#RRGGBB` hex color.
fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    value.parse::<Color>().map(drop).map_err(|err| {
        let mut error = ValidationError::new("hex_color");
        error.message = Some(err.to_string().into());
        error
    })
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
