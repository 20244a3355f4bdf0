//! get-papers-list - Entry Point
//!
//! Searches PubMed and reports papers with pharma/biotech-affiliated authors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_pharma_papers::config::{Config, api};
use pubmed_pharma_papers::formatters::{self, ReportFormat};
use pubmed_pharma_papers::PubMedPharmaFetcher;

#[derive(Parser, Debug)]
#[command(name = "get-papers-list")]
#[command(
    about = "Fetch research papers from PubMed with pharmaceutical/biotech company affiliations"
)]
#[command(version)]
#[command(after_help = "Examples:
  get-papers-list \"cancer AND drug therapy\"
  get-papers-list \"COVID-19 AND vaccine\" --file results.csv
  get-papers-list \"diabetes AND treatment\" --debug --file diabetes_papers.csv

Supports full PubMed query syntax: AND/OR/NOT, field tags such as [Title],
date ranges such as 2020:2023[PDAT], and MeSH terms.")]
struct Cli {
    /// PubMed search query
    query: String,

    /// Output file for results (prints to stdout if not given)
    #[arg(short, long, value_name = "FILENAME")]
    file: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of papers to fetch
    #[arg(long, value_name = "N", default_value_t = api::DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Email address sent to NCBI for identification (recommended)
    #[arg(long, env = "PUBMED_EMAIL")]
    email: Option<String>,

    /// NCBI API key for higher rate limits
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(debug: bool, json: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so the report on stdout stays clean.
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::new(cli.email, cli.api_key);
    let fetcher = PubMedPharmaFetcher::from_config(config)?;

    tracing::info!("Starting paper fetch process");
    let records = fetcher.fetch_papers(&cli.query, cli.max_results).await?;

    if records.is_empty() {
        tracing::warn!("No papers found with pharmaceutical/biotech affiliations");
        return Ok(());
    }

    match &cli.file {
        Some(path) => formatters::save_to_file(&records, path, cli.format)?,
        None => formatters::print_to_console(&records, cli.format)?,
    }

    tracing::info!(records = records.len(), "Process completed successfully");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let debug = cli.debug;

    init_tracing(debug, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), query = %cli.query, "Parsed arguments");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Error");
            if debug {
                tracing::debug!(error = ?e, "Full error chain");
            }
            ExitCode::FAILURE
        }
    }
}
