//! Color recipes: pure functions selecting palette swatches for UI states.

mod neutral_fill_toggle;
mod parity;

pub use neutral_fill_toggle::{neutral_fill_toggle, neutral_fill_toggle_legacy, select_family};
pub use parity::{ParityMismatch, ParityReport, check_parity};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Interaction states a fill recipe resolves a color for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillState {
    /// Resting state.
    Rest,
    /// Pointer hovering.
    Hover,
    /// Pressed.
    Active,
    /// Keyboard focus.
    Focus,
}

impl FillState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 4] = [Self::Rest, Self::Hover, Self::Active, Self::Focus];

    /// Stable lowercase key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Focus => "focus",
        }
    }
}

impl fmt::Display for FillState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per [`FillState`].
///
/// The typed recipe fills it with [`Color`]s, the legacy adapter with hex
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillSwatchFamily<T> {
    /// Resting state value.
    pub rest: T,
    /// Hover state value.
    pub hover: T,
    /// Active state value.
    pub active: T,
    /// Focus state value.
    pub focus: T,
}

impl<T> FillSwatchFamily<T> {
    /// Value for `state`.
    pub const fn get(&self, state: FillState) -> &T {
        match state {
            FillState::Rest => &self.rest,
            FillState::Hover => &self.hover,
            FillState::Active => &self.active,
            FillState::Focus => &self.focus,
        }
    }

    /// Apply `f` to every value, keeping the state keys.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> FillSwatchFamily<U> {
        FillSwatchFamily {
            rest: f(self.rest),
            hover: f(self.hover),
            active: f(self.active),
            focus: f(self.focus),
        }
    }

    /// `(state, value)` pairs in [`FillState::ALL`] order.
    pub fn entries(&self) -> [(FillState, &T); 4] {
        FillState::ALL.map(|state| (state, self.get(state)))
    }
}

impl FillSwatchFamily<Color> {
    /// Hex serialization of every state.
    pub fn to_hex(&self) -> FillSwatchFamily<String> {
        self.map(Color::to_hex)
    }
}

/// Signed palette offsets per state, applied along a [`Direction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleDeltas {
    /// Offset of the rest state; zero keeps the reference swatch itself.
    #[serde(default)]
    pub rest: i32,
    /// Offset of the hover state.
    pub hover: i32,
    /// Offset of the active state.
    pub active: i32,
    /// Offset of the focus state.
    pub focus: i32,
}

impl ToggleDeltas {
    /// Deltas with the rest state pinned to the reference swatch.
    pub const fn new(hover: i32, active: i32, focus: i32) -> Self {
        Self {
            rest: 0,
            hover,
            active,
            focus,
        }
    }

    /// Delta for `state`.
    pub const fn get(&self, state: FillState) -> i32 {
        match state {
            FillState::Rest => self.rest,
            FillState::Hover => self.hover,
            FillState::Active => self.active,
            FillState::Focus => self.focus,
        }
    }
}

/// Which way positive deltas walk through a light-to-dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards index 0.
    Lighter,
    /// Towards the last index.
    Darker,
}

impl Direction {
    /// Light references step darker, dark references step lighter.
    pub fn for_reference(reference: Color) -> Self {
        if reference.is_dark() {
            Self::Lighter
        } else {
            Self::Darker
        }
    }

    /// `-1` or `1`.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Lighter => -1,
            Self::Darker => 1,
        }
    }
}
