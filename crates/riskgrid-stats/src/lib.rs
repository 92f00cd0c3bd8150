//! Statistical primitives for the Riskgrid pipeline.
//!
//! This crate provides the small, dependency-free statistical core used by
//! the data-preparation pipeline:
//!
//! - [`binning`]: Rank-based quantile binning that keeps every bin populated
//!   proportionally to the data, even under heavily skewed distributions
//! - [`correlation`]: Pearson product-moment correlation with defined
//!   degenerate values for sparse or constant input
//! - [`descriptive`]: Descriptive statistics for summarizing score
//!   distributions
//!
//! # Examples
//!
//! ## Binning a skewed sample by rank
//!
//! ```
//! use riskgrid_stats::binning::RankQuantileBinner;
//!
//! // Most respondents cluster at 3; rank binning still spreads them.
//! let values = [1.0, 3.0, 3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 5.0];
//! let binner = RankQuantileBinner::from_values(values, 5);
//! assert_eq!(binner.bin(1.0), Some(0));
//! assert_eq!(binner.bin(5.0), Some(4));
//! ```
//!
//! ## Correlating two series
//!
//! ```
//! use riskgrid_stats::correlation::pearson;
//!
//! let r = pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]);
//! assert!((r - 1.0).abs() < 1e-6);
//! ```

pub mod binning;
pub mod correlation;
pub mod descriptive;
