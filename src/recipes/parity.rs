//! Cross-check of the legacy and typed neutral fill toggle call shapes.

use serde::Serialize;
use tracing::debug;

use super::{FillState, neutral_fill_toggle, neutral_fill_toggle_legacy};
use crate::{design_system::DesignSystem, error::RecipeError, palette::Palette};

/// A state whose legacy and typed outputs disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParityMismatch {
    /// Palette index used as the reference swatch.
    pub index: usize,
    /// Disagreeing state.
    pub state: FillState,
    /// Hex produced by the legacy adapter.
    pub legacy: String,
    /// Hex produced by the typed recipe.
    pub typed: String,
}

/// Outcome of [`check_parity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParityReport {
    /// Number of reference swatches evaluated.
    pub compared: usize,
    /// Lengths of the typed palette and the design system's palette, when they differ.
    pub length_mismatch: Option<(usize, usize)>,
    /// Every disagreement found.
    pub mismatches: Vec<ParityMismatch>,
}

impl ParityReport {
    /// `true` when both call shapes agree on every swatch and state.
    pub fn is_consistent(&self) -> bool {
        self.length_mismatch.is_none() && self.mismatches.is_empty()
    }
}

/// Evaluate both call shapes with every palette swatch as the reference.
///
/// The legacy side reads its background from `design.neutral_palette[i]`,
/// the typed side uses `palette.swatches()[i]`.
pub fn check_parity(design: &DesignSystem, palette: &Palette) -> Result<ParityReport, RecipeError> {
    let deltas = design.toggle_deltas();
    let mut report = ParityReport::default();
    if palette.len() != design.neutral_palette.len() {
        report.length_mismatch = Some((palette.len(), design.neutral_palette.len()));
    }

    for (index, (swatch, background)) in palette
        .swatches()
        .iter()
        .zip(&design.neutral_palette)
        .enumerate()
    {
        let legacy = neutral_fill_toggle_legacy(&design.with_background_color(background.as_str()))?;
        let typed = neutral_fill_toggle(palette, *swatch, &deltas).to_hex();

        for state in FillState::ALL {
            let (legacy, typed) = (legacy.get(state), typed.get(state));
            if legacy != typed {
                report.mismatches.push(ParityMismatch {
                    index,
                    state,
                    legacy: legacy.clone(),
                    typed: typed.clone(),
                });
            }
        }
        report.compared += 1;
    }

    debug!(
        compared = report.compared,
        mismatches = report.mismatches.len(),
        "neutral fill toggle parity checked"
    );
    Ok(report)
}
