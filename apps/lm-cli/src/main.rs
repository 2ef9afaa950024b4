//! # lifemeter
//!
//! Command-line front end for the lifespan calculator:
//! - `lifemeter estimate` — one-shot remaining-time estimate
//! - `lifemeter countries` — list the lifespan table
//! - `lifemeter shell` — interactive calculator and life-goal checklist

mod commands;
mod config;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lm_lifespan::{DisplayStyle, Gender, TimeUnit};
use tracing_subscriber::EnvFilter;

use crate::config::LifemeterConfig;

/// Estimate how much time you have left, and what to do with it.
#[derive(Parser)]
#[command(name = "lifemeter", version, about)]
struct Cli {
    /// Config file (defaults to <config dir>/lifemeter/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log library activity at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate remaining lifespan once and print it.
    Estimate {
        /// Age in years, as text (e.g. "30").
        #[arg(long)]
        age: String,
        /// male, female or other.
        #[arg(long)]
        gender: Gender,
        /// Nationality as listed by `lifemeter countries`.
        #[arg(long)]
        nationality: String,
        /// weeks, months or years (defaults to the configured unit).
        #[arg(long)]
        unit: Option<TimeUnit>,
        /// default, cats or eggplants (defaults to the configured style).
        #[arg(long)]
        style: Option<DisplayStyle>,
        /// Print the estimate as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List nationalities and their average lifespans.
    Countries,
    /// Start the interactive calculator.
    Shell,
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "warn,lifemeter=debug,lm_lifespan=debug,lm_goal=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    // Logs go to stderr so they never mix with rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = LifemeterConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Estimate {
            age,
            gender,
            nationality,
            unit,
            style,
            json,
        } => commands::estimate::execute(
            &config,
            &commands::estimate::EstimateArgs {
                age,
                gender,
                nationality,
                unit,
                style,
                json,
            },
        ),
        Commands::Countries => commands::countries::execute(),
        Commands::Shell => commands::shell::run(&config),
    }
}
