//! Risk-matrix heatmap data preparation
//!
//! This crate turns two raw survey tables (a lifestyle dataset and a
//! workplace dataset) into four fixed 5×5 risk-matrix heatmaps with
//! guaranteed-nonempty cells. It is a pure in-process transformation: no
//! I/O, no rendering, and no failure path for well-typed input.
//!
//! # Pipeline stages
//!
//! 1. **Normalize** ([`normalize`]): raw cells (numbers, comma decimals,
//!    EN/FR Likert text) become nullable numbers
//! 2. **Resolve** ([`variable`]): logical variables find their actual
//!    column spelling per dataset, degrading silently when absent
//! 3. **Derive** ([`dataset`]): tables become immutable columnar
//!    [`NumericDataset`](dataset::NumericDataset) snapshots
//! 4. **Bin** ([`riskgrid_stats::binning`]): one rank-quantile binner per
//!    logical variable keeps every grid bin populated under skew
//! 5. **Correlate** ([`pipeline::correlate_by_country`]): Pearson over
//!    per-country means, with defined degenerate values
//! 6. **Sample** ([`sampler`]): country-matched joint draws, independent
//!    fallback draws, and a synthetic top-up guarantee that every cell
//!    reaches its minimum sample count
//!
//! # Example
//!
//! ```
//! use riskgrid_prep::{
//!     heatmap::MIN_SAMPLES_PER_CELL,
//!     pipeline::build_risk_matrix,
//!     table::{RawValue, Row, Table},
//! };
//!
//! let mut row = Row::new();
//! row.insert("country", RawValue::Text("FR".to_owned()));
//! row.insert("stress_level", RawValue::Text("très élevé".to_owned()));
//! let lifestyle = Table::new(vec![row]);
//!
//! let matrix = build_risk_matrix(&lifestyle, &Table::default(), &mut rand::rng());
//! assert_eq!(matrix.heatmaps.len(), 4);
//! for heatmap in &matrix.heatmaps {
//!     for cell in &heatmap.cells {
//!         assert!(cell.scores.len() >= MIN_SAMPLES_PER_CELL);
//!     }
//! }
//! ```

pub mod dataset;
pub mod heatmap;
pub mod normalize;
pub mod pipeline;
pub mod sampler;
pub mod score;
pub mod table;
pub mod variable;
