use clap::{Parser, Subcommand};

mod build;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Build the four risk-matrix heatmaps and write them as JSON
    Build(build::BuildArg),
    /// Run the pipeline and print per-heatmap summary statistics
    Summary(summary::SummaryArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Build(arg) => build::run(&arg),
        Mode::Summary(arg) => summary::run(&arg),
    }
}
