//! `ndcg` - compute NDCG@k between a predicted and an ideal ranking.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ndcg_core::{EvalConfig, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Ranking quality checker: DCG / NDCG at a cutoff rank
#[derive(Parser, Debug)]
#[command(name = "ndcg")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./ndcg.toml when present)
    #[arg(short, long, global = true, env = "NDCG_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Decimal places for printed scores
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the built-in reference rankings
    Example {
        /// Cutoff rank (defaults to the predicted ranking length)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Score two comma-separated rankings
    Score {
        /// Predicted ranking, e.g. "1,2,6,7,4"
        #[arg(short, long, allow_hyphen_values = true)]
        predicted: String,

        /// Ideal ranking, e.g. "1,8,2,3,4"
        #[arg(short, long, allow_hyphen_values = true)]
        ideal: String,

        /// Cutoff rank (defaults to the predicted ranking length)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Score two randomly generated rankings of distinct items
    Random {
        /// Items per ranking
        #[arg(long)]
        length: Option<usize>,

        /// Items are drawn from 0..MAX_VALUE
        #[arg(long)]
        max_value: Option<u64>,

        /// Seed for reproducible rankings
        #[arg(long)]
        seed: Option<u64>,

        /// Cutoff rank (defaults to the predicted ranking length)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Merges command-line flags over the loaded configuration.
fn resolve_config(cli: &Cli) -> anyhow::Result<EvalConfig> {
    let mut config =
        EvalConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if let Command::Random {
        length,
        max_value,
        seed,
        ..
    } = &cli.command
    {
        config.random.length = length.unwrap_or(config.random.length);
        config.random.max_value = max_value.unwrap_or(config.random.max_value);
        config.random.seed = seed.or(config.random.seed);
        config
            .random
            .validate()
            .context("invalid random ranking settings")?;
    }

    config.validate().context("invalid settings")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only results.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(command = ?cli.command, "running");

    let output = match &cli.command {
        Command::Example { k } => commands::cmd_example(&config, k.or(config.k))?,
        Command::Score { predicted, ideal, k } => {
            commands::cmd_score(&config, predicted, ideal, k.or(config.k))?
        }
        Command::Random { k, .. } => commands::cmd_random(&config, k.or(config.k))?,
        Command::Config => config.to_toml().context("failed to render configuration")?,
    };

    println!("{output}");
    Ok(())
}
