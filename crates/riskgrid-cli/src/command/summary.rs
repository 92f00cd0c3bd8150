use std::path::PathBuf;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use riskgrid_prep::pipeline;
use riskgrid_stats::descriptive::DescriptiveStats;

use crate::load;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    /// Lifestyle (social) survey CSV path
    #[arg(long)]
    lifestyle: PathBuf,
    /// Workplace survey CSV path
    #[arg(long)]
    workplace: PathBuf,
    /// Sampling seed; a random one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let lifestyle = load::load_table(&arg.lifestyle)?;
    let workplace = load::load_table(&arg.workplace)?;

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg32::seed_from_u64(seed);
    let matrix = pipeline::build_risk_matrix(&lifestyle, &workplace, &mut rng);

    println!("seed: {seed}");
    for heatmap in &matrix.heatmaps {
        let stats = DescriptiveStats::new(heatmap.cells.iter().map(|c| c.mean))
            .expect("heatmap grids are never empty");
        println!();
        println!("{}", heatmap.title);
        println!("  correlation (country means): {:+.3}", heatmap.correlation);
        println!(
            "  cell means: min {:.1}  max {:.1}  mean {:.1}  std dev {:.1}",
            stats.min, stats.max, stats.mean, stats.std_dev
        );
    }
    Ok(())
}
