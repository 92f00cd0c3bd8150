//! Synthetic cell sampling
//!
//! Populates a 5×5 grid of wellbeing scores for one variable pair. The
//! stages run in order:
//!
//! 1. **Joint pool**: when both datasets carry a country column, random
//!    cross pairs are drawn within each shared country (capped per group).
//!    This preserves within-country covariance instead of treating the two
//!    variables as independent.
//! 2. **Fallback pool**: an undersized joint pool (including the
//!    no-country case) is padded with independent random pairs from the
//!    global finite-value pools, which assumes independence when no
//!    grouping signal exists.
//! 3. **Deposit**: each sample pair is binned on both axes and a noisy
//!    score from the directional model lands in the matching cell.
//! 4. **Guaranteed fill**: any cell still short of
//!    [`MIN_SAMPLES_PER_CELL`] is topped up with synthetic draws at its
//!    exact bin coordinates. This is what makes the "no empty cell"
//!    invariant unconditional: it holds even when a cell saw zero real
//!    samples.
//!
//! Every random draw goes through the caller-supplied generator, so tests
//! pin a seed while production uses an OS-seeded source.

use rand::Rng;
use rand_distr::Normal;

use riskgrid_stats::{binning::RankQuantileBinner, descriptive::mean};

use crate::{
    dataset::NumericDataset,
    heatmap::{Cell, GRID_SIZE, MIN_SAMPLES_PER_CELL},
    score::{MAX_SCORE, score_from_bins},
    variable::{SurveyVariable, VariablePair},
};

/// Maximum number of cross pairs drawn per shared country group.
pub const JOINT_GROUP_CAP: usize = 120;

/// Minimum joint-pool size; below it the independent fallback pool is added.
pub const FALLBACK_MIN_POOL: usize = 300;

/// Upper bound on independent fallback draws (also capped at twice the
/// smaller finite-value pool).
pub const FALLBACK_POOL_CAP: usize = 5000;

/// Standard deviation of the Gaussian noise on deposited real samples.
pub const DEPOSIT_NOISE_SIGMA: f32 = 6.0;

/// Standard deviation of the Gaussian noise on synthetic fill draws.
pub const FILL_NOISE_SIGMA: f32 = 7.0;

/// Builds the fully-populated cell grid for one variable pair.
///
/// Never fails: every degenerate input (no country column, empty tables,
/// all-null columns) degrades to the fallback pool and, ultimately, to the
/// guaranteed fill stage.
pub fn build_cells<R>(
    social: &NumericDataset,
    work: &NumericDataset,
    pair: VariablePair,
    row_binner: &RankQuantileBinner,
    col_binner: &RankQuantileBinner,
    rng: &mut R,
) -> Vec<Cell>
where
    R: Rng + ?Sized,
{
    let pool = sample_pool(social, work, pair, rng);

    let mut cells = (0..GRID_SIZE)
        .flat_map(|row| (0..GRID_SIZE).map(move |col| Cell::empty(row, col)))
        .collect::<Vec<_>>();

    let row_direction = pair.social.direction();
    let col_direction = pair.work.direction();

    let deposit_noise = Normal::new(0.0, DEPOSIT_NOISE_SIGMA).unwrap();
    for (row_value, col_value) in &pool {
        let (Some(row_bin), Some(col_bin)) = (row_binner.bin(*row_value), col_binner.bin(*col_value))
        else {
            continue;
        };
        let base = score_from_bins(row_bin, row_direction, col_bin, col_direction);
        let score = (base + rng.sample(deposit_noise)).clamp(0.0, MAX_SCORE);
        cells[row_bin * GRID_SIZE + col_bin].scores.push(score);
    }

    let fill_noise = Normal::new(0.0, FILL_NOISE_SIGMA).unwrap();
    let mut filled = 0usize;
    for cell in &mut cells {
        let base = score_from_bins(cell.row_bin, row_direction, cell.col_bin, col_direction);
        filled += MIN_SAMPLES_PER_CELL.saturating_sub(cell.scores.len());
        while cell.scores.len() < MIN_SAMPLES_PER_CELL {
            let score = (base + rng.sample(fill_noise)).clamp(0.0, MAX_SCORE);
            cell.scores.push(score);
        }
        cell.mean = mean(&cell.scores).expect("cells are non-empty after fill");
    }
    tracing::debug!(
        title = pair.title,
        pool = pool.len(),
        synthetic_fill = filled,
        "cell grid populated"
    );

    cells
}

/// Draws the joint sample pool for a pair, padding with independent global
/// draws when the country-matched pool is too small.
fn sample_pool<R>(
    social: &NumericDataset,
    work: &NumericDataset,
    pair: VariablePair,
    rng: &mut R,
) -> Vec<(f32, f32)>
where
    R: Rng + ?Sized,
{
    let row_field = pair.social.id();
    let col_field = pair.work.id();
    let mut pool = Vec::new();

    if let (Some(social_groups), Some(work_groups)) =
        (social.group_by_country(), work.group_by_country())
    {
        for (country, social_rows) in &social_groups {
            let Some(work_rows) = work_groups.get(country) else {
                continue;
            };
            let draws = JOINT_GROUP_CAP
                .min(social_rows.len())
                .min(work_rows.len());
            for _ in 0..draws {
                let s = social_rows[rng.random_range(0..social_rows.len())];
                let w = work_rows[rng.random_range(0..work_rows.len())];
                if let (Some(row_value), Some(col_value)) =
                    (social.value_at(row_field, s), work.value_at(col_field, w))
                {
                    pool.push((row_value, col_value));
                }
            }
        }
    }

    if pool.len() < FALLBACK_MIN_POOL {
        let row_pool = social.finite_values(row_field);
        let col_pool = work.finite_values(col_field);
        let draws = FALLBACK_POOL_CAP
            .min(row_pool.len() * 2)
            .min(col_pool.len() * 2);
        tracing::debug!(
            title = pair.title,
            joint = pool.len(),
            fallback = draws,
            "joint pool undersized; adding independent draws"
        );
        for _ in 0..draws {
            pool.push((
                row_pool[rng.random_range(0..row_pool.len())],
                col_pool[rng.random_range(0..col_pool.len())],
            ));
        }
    }

    pool
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{
        table::{RawValue, Row, Table},
        variable::{FIXED_PAIRS, SocialVariable, WorkVariable},
    };

    fn social_row(country: &str, stress: f32) -> Row {
        let mut row = Row::new();
        row.insert("country", RawValue::Text(country.to_owned()));
        row.insert("stress_level", RawValue::Number(stress));
        row
    }

    fn work_row(country: &str, hours: f32) -> Row {
        let mut row = Row::new();
        row.insert("country", RawValue::Text(country.to_owned()));
        row.insert("work_hours_week", RawValue::Number(hours));
        row
    }

    fn stress_hours_pair() -> VariablePair {
        FIXED_PAIRS[1]
    }

    fn build_for(
        social_table: &Table,
        work_table: &Table,
        seed: u64,
    ) -> Vec<Cell> {
        let social = NumericDataset::from_table(social_table, &SocialVariable::ALL);
        let work = NumericDataset::from_table(work_table, &WorkVariable::ALL);
        let pair = stress_hours_pair();
        let row_binner =
            RankQuantileBinner::from_values(social.finite_values(pair.social.id()), GRID_SIZE);
        let col_binner =
            RankQuantileBinner::from_values(work.finite_values(pair.work.id()), GRID_SIZE);
        let mut rng = Pcg32::seed_from_u64(seed);
        build_cells(&social, &work, pair, &row_binner, &col_binner, &mut rng)
    }

    fn populated_tables() -> (Table, Table) {
        let countries = ["FR", "DE", "BE", "NL", "IT"];
        let social = (0..150)
            .map(|i| social_row(countries[i % countries.len()], (i % 5) as f32 + 1.0))
            .collect::<Table>();
        let work = (0..150)
            .map(|i| work_row(countries[i % countries.len()], 20.0 + (i % 50) as f32))
            .collect::<Table>();
        (social, work)
    }

    #[test]
    fn every_cell_reaches_the_minimum_sample_count() {
        let (social, work) = populated_tables();
        let cells = build_for(&social, &work, 7);

        assert_eq!(cells.len(), GRID_SIZE * GRID_SIZE);
        for cell in &cells {
            assert!(cell.scores.len() >= MIN_SAMPLES_PER_CELL);
            assert!(cell.mean.is_finite());
            assert!((0.0..=MAX_SCORE).contains(&cell.mean));
            for score in &cell.scores {
                assert!((0.0..=MAX_SCORE).contains(score));
            }
        }
    }

    #[test]
    fn empty_tables_fill_every_cell_synthetically() {
        let cells = build_for(&Table::default(), &Table::default(), 11);

        for cell in &cells {
            // No real deposits can occur, so the fill stage provides exactly
            // the minimum.
            assert_eq!(cell.scores.len(), MIN_SAMPLES_PER_CELL);
        }

        // With no real data the means follow the directional model closely:
        // stress × work hours are both risk factors.
        let cell_at = |r: usize, c: usize| &cells[r * GRID_SIZE + c];
        assert!(cell_at(0, 0).mean > 90.0);
        assert!(cell_at(4, 4).mean < 10.0);
        assert!((cell_at(2, 2).mean - 50.0).abs() < 5.0);
        assert!(cell_at(0, 0).mean > cell_at(4, 4).mean);
    }

    #[test]
    fn all_null_columns_degrade_to_synthetic_fill() {
        let social = (0..40)
            .map(|_| {
                let mut row = Row::new();
                row.insert("country", RawValue::Text("FR".to_owned()));
                row.insert("stress_level", RawValue::Text("banana".to_owned()));
                row
            })
            .collect::<Table>();
        let work = (0..40).map(|i| work_row("FR", 30.0 + i as f32)).collect::<Table>();

        let cells = build_for(&social, &work, 13);
        for cell in &cells {
            assert!(cell.scores.len() >= MIN_SAMPLES_PER_CELL);
            assert!(cell.mean.is_finite());
        }
    }

    #[test]
    fn joint_sampling_is_used_when_countries_are_shared() {
        let (social, work) = populated_tables();
        let social = NumericDataset::from_table(&social, &SocialVariable::ALL);
        let work = NumericDataset::from_table(&work, &WorkVariable::ALL);
        let mut rng = Pcg32::seed_from_u64(17);

        let pool = sample_pool(&social, &work, stress_hours_pair(), &mut rng);
        // 5 shared countries × 30 rows each: joint draws run at group size,
        // then the <300 check tops the pool up with independent draws.
        assert!(pool.len() >= FALLBACK_MIN_POOL);
        for (s, w) in &pool {
            assert!(s.is_finite() && w.is_finite());
        }
    }

    #[test]
    fn disjoint_countries_fall_back_to_independent_draws() {
        let social = (0..50).map(|i| social_row("FR", (i % 5) as f32)).collect::<Table>();
        let work = (0..50).map(|i| work_row("JP", 20.0 + i as f32)).collect::<Table>();
        let social = NumericDataset::from_table(&social, &SocialVariable::ALL);
        let work = NumericDataset::from_table(&work, &WorkVariable::ALL);
        let mut rng = Pcg32::seed_from_u64(19);

        let pool = sample_pool(&social, &work, stress_hours_pair(), &mut rng);
        // No shared country: the pool is entirely independent draws, capped
        // at twice the smaller finite pool.
        assert_eq!(pool.len(), 100);
    }
}
