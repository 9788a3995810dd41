use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spendlens_finance::FinanceTracker;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;
mod state;

use config::Config;
use report::{Format, Report};

#[derive(Parser, Debug)]
#[command(name = "spendlens", version, about = "Summarize spending from CSV transaction exports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a CSV export, total it by category and month, and print a report
    Analyze {
        /// Path to the CSV (comma, semicolon, tab or pipe separated)
        csv: PathBuf,

        /// Output format (default from config: text)
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of top categories listed (default from config: 5)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Manage ~/.spendlens/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_tracing(&cfg.log.level);

    match cli.command {
        Command::Analyze {
            csv,
            format,
            output,
            top,
        } => {
            let format = format.unwrap_or(cfg.report.format);
            let top = top.unwrap_or(cfg.report.top_categories);
            analyze(&cfg, &csv, format, output.as_deref(), top)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn analyze(cfg: &Config, csv: &Path, format: Format, output: Option<&Path>, top: usize) -> Result<()> {
    let mut tracker = FinanceTracker::new(cfg.ingest_options());
    let loaded = tracker
        .load(csv)
        .with_context(|| format!("loading {}", csv.display()))?
        .loaded();

    if tracker.analyze().is_none() {
        println!(
            "No transactions to analyze in {} ({} rows skipped)",
            csv.display(),
            tracker.rejections().len()
        );
        return Ok(());
    }

    let summary = tracker.summary_top(top).context("no transactions to summarize")?;
    let aggregates = tracker.aggregates().context("analysis did not run")?;
    let report = Report::new(csv, &summary, aggregates, tracker.rejections());
    let rendered = report.render(format).context("render report")?;

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), transactions = loaded, "report written");
            println!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
