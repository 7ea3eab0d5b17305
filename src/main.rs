mod cli;

use clap::Parser;
use legis_kpi::error::LegisError;
use legis_kpi::types::config::ScoringConfig;
use legis_kpi::types::report::LegislatorReport;
use legis_kpi::{config, input, report, Engine};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scoring_config(explicit: Option<&Path>, root: &Path) -> Result<ScoringConfig, LegisError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(root),
    }
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn render_batch(
    reports: &[LegislatorReport],
    format: report::OutputFormat,
) -> Result<String, LegisError> {
    match format {
        report::OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        report::OutputFormat::Md => Ok(reports
            .iter()
            .map(report::md::to_markdown)
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
    }
}

fn run() -> Result<i32, LegisError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    let cwd = std::env::current_dir()?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let scoring = load_scoring_config(cli.config.as_deref(), &cwd)?;
            let engine = Engine::from_config(&scoring)?;
            let bundle = input::load_bundle(&cmd.path)?;
            let legislator_report = engine.evaluate(&bundle);
            info!(path = %cmd.path.display(), "bundle scored");
            println!(
                "{}",
                report::render(&legislator_report, output_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let scoring = load_scoring_config(cli.config.as_deref(), &cwd)?;
            let engine = Engine::from_config(&scoring)?;
            let files = input::discover_bundles(&cmd.path)?;
            info!(count = files.len(), root = %cmd.path.display(), "bundles discovered");

            let mut reports = Vec::with_capacity(files.len());
            let mut failures = 0usize;
            for file in &files {
                match input::load_bundle(file) {
                    Ok(bundle) => reports.push(engine.evaluate(&bundle)),
                    Err(e) => {
                        warn!(path = %file.display(), "bundle skipped");
                        eprintln!("error: {e}");
                        failures += 1;
                    }
                }
            }

            println!("{}", render_batch(&reports, output_format(cmd.format))?);
            if failures > 0 {
                Ok(exit_code::INVALID_INPUT)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Classify(cmd) => {
            let scoring = load_scoring_config(cli.config.as_deref(), &cwd)?;
            let engine = Engine::from_config(&scoring)?;
            let bundle = input::load_bundle(&cmd.path)?;
            let buckets = engine.themes.classify_all(&bundle.bills);
            print!("{}", report::md::themes_markdown(&buckets));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::CheckConfig(cmd) => {
            if !cmd.path.exists() {
                return Err(LegisError::PathNotFound(cmd.path.display().to_string()));
            }
            let scoring = load_scoring_config(cli.config.as_deref(), &cmd.path)?;
            Engine::from_config(&scoring)?;
            println!("config: ok");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
