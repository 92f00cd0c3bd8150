//! Pipeline entry point
//!
//! Runs the full preparation sequence over two freshly-loaded tables:
//! derive numeric datasets, build one rank-quantile binner per logical
//! variable (shared across every pair that references it), compute the
//! country-mean correlation per pair, populate each pair's cell grid, and
//! assemble the final [`RiskMatrix`].
//!
//! Each call owns its entire intermediate state; concurrent calls are
//! independent. The pipeline cannot fail for well-typed input: empty
//! tables, missing columns, and absent join keys all degrade to defined
//! fallbacks.
//!
//! # Examples
//!
//! ```
//! use riskgrid_prep::{pipeline::build_risk_matrix, table::Table};
//!
//! // Empty inputs still produce a fully-populated, renderable result.
//! let matrix = build_risk_matrix(&Table::default(), &Table::default(), &mut rand::rng());
//! assert_eq!(matrix.heatmaps.len(), 4);
//! assert!(matrix.heatmaps.iter().all(|h| h.correlation == 0.0));
//! ```

use std::collections::BTreeMap;

use rand::Rng;

use riskgrid_stats::{binning::RankQuantileBinner, correlation::pearson};

use crate::{
    dataset::NumericDataset,
    heatmap::{BIN_LABELS, GRID_SIZE, Heatmap, RiskMatrix},
    sampler,
    table::Table,
    variable::{FIXED_PAIRS, SocialVariable, SurveyVariable as _, VariablePair, WorkVariable},
};

/// Pearson correlation of a pair's per-country means.
///
/// Both datasets are partitioned by country; each country present on both
/// sides contributes one (mean-social, mean-work) point. Missing join keys
/// or too few usable countries yield the defined degenerate value `0.0`.
#[must_use]
pub fn correlate_by_country(
    social: &NumericDataset,
    work: &NumericDataset,
    pair: VariablePair,
) -> f32 {
    let (Some(social_groups), Some(work_groups)) =
        (social.group_by_country(), work.group_by_country())
    else {
        tracing::debug!(
            title = pair.title,
            "country column missing on one side; correlation defaults to 0"
        );
        return 0.0;
    };

    let mut social_means = Vec::new();
    let mut work_means = Vec::new();
    for (country, social_rows) in &social_groups {
        let Some(work_rows) = work_groups.get(country) else {
            continue;
        };
        if let (Some(social_mean), Some(work_mean)) = (
            social.group_mean(pair.social.id(), social_rows),
            work.group_mean(pair.work.id(), work_rows),
        ) {
            social_means.push(social_mean);
            work_means.push(work_mean);
        }
    }
    pearson(&social_means, &work_means)
}

/// Runs the complete preparation pipeline and returns the finished matrix.
///
/// `lifestyle` supplies the social (row-axis) variables, `workplace` the
/// work (column-axis) variables. All randomness (joint sampling, noise,
/// synthetic fill) flows through `rng`.
pub fn build_risk_matrix<R>(lifestyle: &Table, workplace: &Table, rng: &mut R) -> RiskMatrix
where
    R: Rng + ?Sized,
{
    let social = NumericDataset::from_table(lifestyle, &SocialVariable::ALL);
    let work = NumericDataset::from_table(workplace, &WorkVariable::ALL);
    tracing::debug!(
        lifestyle_rows = social.len(),
        workplace_rows = work.len(),
        joinable = social.country_key().is_some() && work.country_key().is_some(),
        "datasets derived"
    );

    // One binner per logical variable, shared across all pairs that use it.
    let mut binners: BTreeMap<&'static str, RankQuantileBinner> = BTreeMap::new();
    for pair in FIXED_PAIRS {
        binners.entry(pair.social.id()).or_insert_with(|| {
            RankQuantileBinner::from_values(social.finite_values(pair.social.id()), GRID_SIZE)
        });
        binners.entry(pair.work.id()).or_insert_with(|| {
            RankQuantileBinner::from_values(work.finite_values(pair.work.id()), GRID_SIZE)
        });
    }

    let mut heatmaps = Vec::with_capacity(FIXED_PAIRS.len());
    for pair in FIXED_PAIRS {
        let correlation = correlate_by_country(&social, &work, pair);
        let cells = sampler::build_cells(
            &social,
            &work,
            pair,
            &binners[pair.social.id()],
            &binners[pair.work.id()],
            rng,
        );
        tracing::info!(title = pair.title, correlation, "heatmap built");
        heatmaps.push(Heatmap {
            title: pair.title.to_owned(),
            row_variable: pair.social.id().to_owned(),
            col_variable: pair.work.id().to_owned(),
            correlation,
            bin_labels: BIN_LABELS,
            cells,
        });
    }

    RiskMatrix {
        heatmaps,
        bin_labels: BIN_LABELS,
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{
        heatmap::MIN_SAMPLES_PER_CELL,
        table::{RawValue, Row},
    };

    const COUNTRIES: [&str; 10] = [
        "FR", "DE", "BE", "NL", "IT", "ES", "PT", "SE", "NO", "FI",
    ];

    /// Two 200-row datasets joined by 10 shared countries, numeric
    /// stress 1-5 and work hours 20-70.
    fn scenario_tables(seed: u64) -> (Table, Table) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let lifestyle = (0..200)
            .map(|i| {
                let mut row = Row::new();
                row.insert(
                    "country",
                    RawValue::Text(COUNTRIES[i % COUNTRIES.len()].to_owned()),
                );
                row.insert(
                    "stress_level",
                    RawValue::Number(rng.random_range(1..=5) as f32),
                );
                row.insert(
                    "sleep_hours",
                    RawValue::Number(rng.random_range(4.0..10.0_f32)),
                );
                row.insert(
                    "social_support",
                    RawValue::Number(rng.random_range(1..=5) as f32),
                );
                row
            })
            .collect::<Table>();
        let workplace = (0..200)
            .map(|i| {
                let mut row = Row::new();
                row.insert(
                    "country",
                    RawValue::Text(COUNTRIES[i % COUNTRIES.len()].to_owned()),
                );
                row.insert(
                    "work_hours_week",
                    RawValue::Number(rng.random_range(20.0..70.0_f32)),
                );
                row.insert(
                    "work_life_balance",
                    RawValue::Number(rng.random_range(1..=5) as f32),
                );
                row.insert(
                    "job_satisfaction",
                    RawValue::Number(rng.random_range(1..=5) as f32),
                );
                row.insert(
                    "career_growth",
                    RawValue::Number(rng.random_range(1..=5) as f32),
                );
                row
            })
            .collect::<Table>();
        (lifestyle, workplace)
    }

    #[test]
    fn scenario_produces_four_fully_populated_heatmaps() {
        let (lifestyle, workplace) = scenario_tables(23);
        let mut rng = Pcg32::seed_from_u64(42);
        let matrix = build_risk_matrix(&lifestyle, &workplace, &mut rng);

        assert_eq!(matrix.heatmaps.len(), 4);
        assert_eq!(matrix.bin_labels[0], "Very low");
        for heatmap in &matrix.heatmaps {
            assert!((-1.0..=1.0).contains(&heatmap.correlation));
            assert_eq!(heatmap.cells.len(), 25);
            for cell in &heatmap.cells {
                assert!(cell.scores.len() >= MIN_SAMPLES_PER_CELL);
                assert!(cell.mean.is_finite());
                assert!((0.0..=100.0).contains(&cell.mean));
            }
        }
    }

    #[test]
    fn stress_by_hours_heatmap_follows_the_risk_gradient() {
        let (lifestyle, workplace) = scenario_tables(29);
        let mut rng = Pcg32::seed_from_u64(31);
        let matrix = build_risk_matrix(&lifestyle, &workplace, &mut rng);

        let heatmap = matrix
            .heatmaps
            .iter()
            .find(|h| h.title == "Stress level × Work hours/week")
            .unwrap();
        assert!(heatmap.correlation.is_finite());
        // Low stress + low hours must read healthier than high + high: both
        // axes are risk factors.
        assert!(heatmap.cell(0, 0).mean > heatmap.cell(4, 4).mean);
    }

    #[test]
    fn heatmaps_keep_pair_declaration_order() {
        let (lifestyle, workplace) = scenario_tables(37);
        let mut rng = Pcg32::seed_from_u64(41);
        let matrix = build_risk_matrix(&lifestyle, &workplace, &mut rng);

        let titles = matrix
            .heatmaps
            .iter()
            .map(|h| h.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            FIXED_PAIRS.iter().map(|p| p.title).collect::<Vec<_>>()
        );
    }

    #[test]
    fn one_empty_table_degrades_correlations_to_zero() {
        let (lifestyle, _) = scenario_tables(43);
        let mut rng = Pcg32::seed_from_u64(47);
        let matrix = build_risk_matrix(&lifestyle, &Table::default(), &mut rng);

        for heatmap in &matrix.heatmaps {
            assert_eq!(heatmap.correlation, 0.0);
            for cell in &heatmap.cells {
                // Synthetic top-up alone populates the grid.
                assert!(cell.scores.len() >= MIN_SAMPLES_PER_CELL);
            }
        }
    }

    #[test]
    fn correlation_needs_three_shared_countries() {
        // Only two shared countries: below the minimum pair count.
        let lifestyle = (0..20)
            .map(|i| {
                let mut row = Row::new();
                row.insert(
                    "country",
                    RawValue::Text(if i % 2 == 0 { "FR" } else { "DE" }.to_owned()),
                );
                row.insert("stress_level", RawValue::Number((i % 5) as f32 + 1.0));
                row
            })
            .collect::<Table>();
        let workplace = (0..20)
            .map(|i| {
                let mut row = Row::new();
                row.insert(
                    "country",
                    RawValue::Text(if i % 2 == 0 { "FR" } else { "DE" }.to_owned()),
                );
                row.insert("work_hours_week", RawValue::Number(30.0 + i as f32));
                row
            })
            .collect::<Table>();

        let social = NumericDataset::from_table(&lifestyle, &SocialVariable::ALL);
        let work = NumericDataset::from_table(&workplace, &WorkVariable::ALL);
        assert_eq!(correlate_by_country(&social, &work, FIXED_PAIRS[1]), 0.0);
    }

    #[test]
    fn correlated_country_means_are_detected() {
        // Country k has stress mean ~k and hours mean ~k: strong positive
        // correlation across the 10 joined countries.
        let lifestyle = (0..COUNTRIES.len())
            .flat_map(|k| {
                (0..10).map(move |_| {
                    let mut row = Row::new();
                    row.insert("country", RawValue::Text(COUNTRIES[k].to_owned()));
                    row.insert("stress_level", RawValue::Number(k as f32));
                    row
                })
            })
            .collect::<Table>();
        let workplace = (0..COUNTRIES.len())
            .flat_map(|k| {
                (0..10).map(move |_| {
                    let mut row = Row::new();
                    row.insert("country", RawValue::Text(COUNTRIES[k].to_owned()));
                    row.insert("work_hours_week", RawValue::Number(20.0 + 5.0 * k as f32));
                    row
                })
            })
            .collect::<Table>();

        let social = NumericDataset::from_table(&lifestyle, &SocialVariable::ALL);
        let work = NumericDataset::from_table(&workplace, &WorkVariable::ALL);
        let r = correlate_by_country(&social, &work, FIXED_PAIRS[1]);
        assert!((r - 1.0).abs() < 1e-5);
    }
}
