use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "legis-kpi",
    version,
    about = "Legislative performance indicators from open-data records"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Scoring config file; skips the global/project/local layering
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one record bundle
    Score(ScoreCommand),
    /// Score every JSON bundle under a directory
    Batch(BatchCommand),
    /// Print thematic buckets for a bundle's bills
    Classify(ClassifyCommand),
    /// Load and validate the scoring configuration
    CheckConfig(CheckConfigCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ClassifyCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct CheckConfigCommand {
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
