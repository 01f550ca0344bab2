//! src/main.rs
//! # UnlockFi CLI
//!
//! Command-line front end for the allocation engine:
//! - CLI argument parsing (clap)
//! - Configuration loading (from TOML/JSON/YAML file or defaults)
//! - Logging initialization (tracing, to stderr)
//! - Subcommands: series, distribution, diagnose, save, load, export,
//!   questionnaire, config
//!
//! Data commands print JSON on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use unlockfi::{
    compute_distribution, load_snapshot, save_snapshot,
    export::{allocation_report, Questionnaire},
    params::{QUESTIONNAIRE_FILE_NAME, REPORT_FILE_NAME},
    utils::{init_logging, JsonSnapshot, LogLevel},
    AppConfig, AnyResult, FileStore, Template, TokenomicsConfig,
};

/// UnlockFi token allocation & unlock schedule CLI
#[derive(Parser, Debug)]
#[command(name = "unlockfi", version = env!("CARGO_PKG_VERSION"), about = "UnlockFi - token allocation and vesting unlock schedules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (TOML, JSON, or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Start from a preset (standard, community-first, venture-backed)
    #[arg(short, long, value_name = "NAME")]
    template: Option<Template>,

    /// Tokenomics snapshot to operate on (JSON, browser format)
    #[arg(short, long, value_name = "FILE", conflicts_with = "template")]
    input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the unlock time series
    Series {
        /// Months to sample; derived from the allocations when omitted
        #[arg(long)]
        horizon: Option<u32>,

        /// Sampling step in months
        #[arg(long)]
        step: Option<f64>,
    },

    /// Print the rounded percentage breakdown
    Distribution,

    /// Print balance status and advisory findings
    Diagnose,

    /// Persist the tokenomics (refused unless percentages total 100%)
    Save,

    /// Print the saved tokenomics
    Load,

    /// Write the allocation report as CSV
    Export {
        #[arg(short, long, default_value = REPORT_FILE_NAME)]
        out: PathBuf,
    },

    /// Write questionnaire answers as CSV
    Questionnaire {
        /// Answer as `id=value`, repeatable
        #[arg(short, long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,

        #[arg(short, long, default_value = QUESTIONNAIRE_FILE_NAME)]
        out: PathBuf,
    },

    /// Print current configuration
    Config,
}

fn main() -> AnyResult<()> {
    let cli = Cli::parse();

    // Load or create config
    let mut app = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    // Apply CLI overrides
    if cli.verbose {
        app.logging.level = LogLevel::Debug;
    }

    init_logging(&app.logging)?;
    debug!(?app, "configuration resolved");

    match cli.command {
        Commands::Series { horizon, step } => {
            let config = working_config(&cli.template, &cli.input)?;
            let mut aggregator = app.aggregator();
            if horizon.is_some() {
                aggregator.horizon_months = horizon;
            }
            if let Some(step) = step {
                aggregator.sample_step_months = step;
            }

            let series = aggregator.compute(&config)?;
            info!(
                points = series.points.len(),
                horizon_months = series.horizon_months,
                tge_share = series.unlocked_share_at_tge(),
                "unlock series computed"
            );
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        Commands::Distribution => {
            let config = working_config(&cli.template, &cli.input)?;
            println!("{}", serde_json::to_string_pretty(&compute_distribution(&config))?);
        }
        Commands::Diagnose => {
            let config = working_config(&cli.template, &cli.input)?;
            let findings: Vec<String> = config.diagnostics().iter().map(ToString::to_string).collect();
            for finding in &findings {
                warn!(%finding, "allocation diagnostic");
            }

            let report = json!({
                "balanced": config.is_balanced(),
                "totalPercentage": config.total_percentage(),
                "tokenAmounts": config.token_amounts(),
                "diagnostics": findings,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Save => {
            let config = working_config(&cli.template, &cli.input)?;
            let mut store = FileStore::new(&app.storage_dir);
            save_snapshot(&mut store, &config)?;
            println!("Tokenomics saved to {}", store.dir().display());
        }
        Commands::Load => {
            let store = FileStore::new(&app.storage_dir);
            match load_snapshot(&store)? {
                Some(config) => println!("{}", config.to_json_pretty()?),
                None => {
                    info!(dir = %store.dir().display(), "no saved tokenomics");
                    println!("null");
                }
            }
        }
        Commands::Export { out } => {
            let config = working_config(&cli.template, &cli.input)?;
            allocation_report(&config).write_csv(&out)?;
            println!("Report written to {}", out.display());
        }
        Commands::Questionnaire { answers, out } => {
            let questionnaire = Questionnaire::from_answers(answers.as_slice())?;
            if !questionnaire.is_complete() {
                warn!("questionnaire has unanswered questions");
            }

            questionnaire.write_csv(&out)?;
            println!("Questionnaire written to {}", out.display());
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&app)?);
        }
    }

    Ok(())
}

/// Tokenomics to operate on: `--input` file, then `--template`, then the seed
fn working_config(template: &Option<Template>, input: &Option<PathBuf>) -> AnyResult<TokenomicsConfig> {
    if let Some(path) = input {
        return read_snapshot(path);
    }
    Ok(template.map(|t| t.config()).unwrap_or_default())
}

fn read_snapshot(path: &Path) -> AnyResult<TokenomicsConfig> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = TokenomicsConfig::from_json(&raw).with_context(|| format!("parsing {}", path.display()))?;
    debug!(allocations = config.allocations.len(), "tokenomics read from file");
    Ok(config)
}
