//! Heatmap output structures
//!
//! The finished product of the pipeline: four 5×5 grids of sampled
//! wellbeing scores, one per fixed variable pair. Everything here is plain
//! serializable data that consumers (a renderer, a report writer) only read.

use serde::Serialize;

/// Number of bins along each axis of a heatmap.
pub const GRID_SIZE: usize = 5;

/// Minimum number of sample scores every cell carries once the pipeline
/// completes. The synthetic fill stage enforces this unconditionally.
pub const MIN_SAMPLES_PER_CELL: usize = 110;

/// Axis labels shared by every heatmap's rows and columns, lowest bin first.
pub const BIN_LABELS: [&str; GRID_SIZE] = ["Very low", "Low", "Medium", "High", "Very high"];

/// One cell of a heatmap grid.
///
/// After the pipeline completes, `scores` holds at least
/// [`MIN_SAMPLES_PER_CELL`] entries and `mean` is finite in `[0, 100]`.
#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    /// Row bin index, `0..GRID_SIZE`.
    pub row_bin: usize,
    /// Column bin index, `0..GRID_SIZE`.
    pub col_bin: usize,
    /// Sampled wellbeing scores deposited into this cell.
    pub scores: Vec<f32>,
    /// Arithmetic mean of `scores`.
    pub mean: f32,
}

impl Cell {
    /// An unfilled cell at the given grid coordinates.
    pub(crate) fn empty(row_bin: usize, col_bin: usize) -> Self {
        Self {
            row_bin,
            col_bin,
            scores: Vec::new(),
            mean: 0.0,
        }
    }
}

/// One finished heatmap: a titled 5×5 grid plus its pair correlation.
#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    /// Human-readable comparison title.
    pub title: String,
    /// Logical id of the row-axis variable.
    pub row_variable: String,
    /// Logical id of the column-axis variable.
    pub col_variable: String,
    /// Country-mean Pearson correlation for the pair, in `[-1, 1]`.
    pub correlation: f32,
    /// Axis labels, lowest bin first.
    pub bin_labels: [&'static str; GRID_SIZE],
    /// All `GRID_SIZE * GRID_SIZE` cells in row-major order.
    pub cells: Vec<Cell>,
}

impl Heatmap {
    /// Returns the cell at `(row_bin, col_bin)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..GRID_SIZE`.
    #[must_use]
    pub fn cell(&self, row_bin: usize, col_bin: usize) -> &Cell {
        assert!(row_bin < GRID_SIZE && col_bin < GRID_SIZE);
        &self.cells[row_bin * GRID_SIZE + col_bin]
    }
}

/// The complete pipeline output: four heatmaps in pair-declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct RiskMatrix {
    /// One heatmap per fixed variable pair.
    pub heatmaps: Vec<Heatmap>,
    /// The shared axis labels, repeated here for convenience.
    pub bin_labels: [&'static str; GRID_SIZE],
}
