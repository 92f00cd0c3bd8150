use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::Serialize;

use riskgrid_prep::{heatmap::RiskMatrix, pipeline};

use crate::{load, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BuildArg {
    /// Lifestyle (social) survey CSV path
    #[arg(long)]
    lifestyle: PathBuf,
    /// Workplace survey CSV path
    #[arg(long)]
    workplace: PathBuf,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Sampling seed; a random one is drawn (and reported) when omitted
    #[arg(long)]
    seed: Option<u64>,
}

/// The JSON report: pipeline output plus provenance for reproduction.
#[derive(Debug, Clone, Serialize)]
struct Report {
    generated_at: DateTime<Utc>,
    seed: u64,
    #[serde(flatten)]
    matrix: RiskMatrix,
}

pub(crate) fn run(arg: &BuildArg) -> anyhow::Result<()> {
    let lifestyle = load::load_table(&arg.lifestyle)?;
    let workplace = load::load_table(&arg.workplace)?;

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Pcg32::seed_from_u64(seed);
    let matrix = pipeline::build_risk_matrix(&lifestyle, &workplace, &mut rng);

    let report = Report {
        generated_at: Utc::now(),
        seed,
        matrix,
    };
    util::save_json(&report, arg.output.as_deref())
}
