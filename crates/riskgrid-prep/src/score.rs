//! Directional wellbeing scoring model
//!
//! Maps a pair of bin coordinates to a deterministic base score in
//! `[0, 100]`. Each bin index contributes a linear effect running from `+1`
//! (bin 0) to `-1` (top bin); risk variables use the effect as-is, while
//! protective variables flip its sign so that "high value" always pushes the
//! score in the healthy direction. The result is an interpretable gradient:
//! protective-high × protective-high cells trend toward 100, risk-high ×
//! risk-high cells toward 0. Sampling noise is layered on top elsewhere.

use crate::{heatmap::GRID_SIZE, variable::Direction};

/// Score of a cell with neutral effects on both axes.
pub const BASE_SCORE: f32 = 50.0;

/// Weight of each axis's directional effect on the final score.
pub const EFFECT_WEIGHT: f32 = 28.0;

/// Upper bound of the score range; the lower bound is 0.
pub const MAX_SCORE: f32 = 100.0;

/// Directional effect of a bin index, in `[-1, 1]`.
///
/// Bin 0 maps to `+1` and the top bin to `-1` for risk variables; the ramp
/// is sign-flipped for protective variables.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn bin_effect(bin: usize, direction: Direction) -> f32 {
    let span = (GRID_SIZE - 1) as f32;
    let linear = 1.0 - 2.0 * (bin as f32 / span);
    match direction {
        Direction::Risk => linear,
        Direction::Protective => -linear,
    }
}

/// Deterministic base score for a cell, clamped to `[0, MAX_SCORE]`.
#[must_use]
pub fn score_from_bins(
    row_bin: usize,
    row_direction: Direction,
    col_bin: usize,
    col_direction: Direction,
) -> f32 {
    let raw = BASE_SCORE
        + EFFECT_WEIGHT * bin_effect(row_bin, row_direction)
        + EFFECT_WEIGHT * bin_effect(col_bin, col_direction);
    raw.clamp(0.0, MAX_SCORE)
}
