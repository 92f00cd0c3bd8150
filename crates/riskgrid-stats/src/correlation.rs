//! Pearson product-moment correlation
//!
//! Correlation here is defined *totally*: every degenerate input maps to a
//! defined coefficient instead of an error. Fewer than
//! [`MIN_CORRELATION_PAIRS`] usable pairs yields `0.0`, as does a series
//! with no variance. Downstream consumers always receive a value in
//! `[-1, 1]` they can display.

/// Minimum number of index-aligned finite pairs required before a
/// correlation is computed; below this the coefficient is defined as `0.0`.
pub const MIN_CORRELATION_PAIRS: usize = 3;

/// Computes the Pearson correlation between two index-aligned series.
///
/// Pairs where either side is non-finite are dropped before computation.
/// Returns `0.0` (not an error) when fewer than [`MIN_CORRELATION_PAIRS`]
/// pairs remain or when either series has zero variance.
///
/// # Examples
///
/// ```
/// use riskgrid_stats::correlation::pearson;
///
/// let r = pearson(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]);
/// assert!((r + 1.0).abs() < 1e-6);
///
/// // Too few pairs: defined degenerate value.
/// assert_eq!(pearson(&[1.0, 2.0], &[2.0, 1.0]), 0.0);
///
/// // Constant series: no variance, no correlation.
/// assert_eq!(pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson(xs: &[f32], ys: &[f32]) -> f32 {
    let pairs = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect::<Vec<_>>();
    if pairs.len() < MIN_CORRELATION_PAIRS {
        return 0.0;
    }

    let n = pairs.len() as f32;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f32>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f32>() / n;

    let numerator = pairs
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f32>();
    let norm_x = pairs
        .iter()
        .map(|(x, _)| (x - mean_x).powi(2))
        .sum::<f32>()
        .sqrt();
    let norm_y = pairs
        .iter()
        .map(|(_, y)| (y - mean_y).powi(2))
        .sum::<f32>()
        .sqrt();
    if norm_x == 0.0 || norm_y == 0.0 {
        return 0.0;
    }
    numerator / (norm_x * norm_y)
}
