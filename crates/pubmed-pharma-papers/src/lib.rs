//! PubMed Pharma Papers
//!
//! Fetches research papers from PubMed and keeps those with at least one
//! author affiliated with a pharmaceutical, biotech or contract-research
//! company.
//!
//! # Features
//!
//! - **Rule-based classifier**: academic veto, industry keywords, known
//!   companies, corporate email domains, in that order
//! - **Company matcher**: known-company list with confidence scores, plus a
//!   "<name> Therapeutics"-style fallback
//! - **Fault-tolerant filter**: a malformed paper is logged and skipped
//! - **CSV/JSON reports**
//!
//! # Example
//!
//! ```no_run
//! use pubmed_pharma_papers::{PubMedPharmaFetcher, config::Config, formatters};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = PubMedPharmaFetcher::from_config(Config::from_env()?)?;
//!     let records = fetcher.fetch_papers("cancer AND drug therapy", 100).await?;
//!     formatters::print_to_console(&records, formatters::ReportFormat::Csv)?;
//!     Ok(())
//! }
//! ```

pub mod affiliation;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatters;
pub mod models;
pub mod pipeline;

pub use affiliation::{extract_company_names, identify_companies, is_non_academic};
pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, FilterError, PipelineError, ReportError};
pub use filter::build_records;
pub use pipeline::{PaperSource, PubMedPharmaFetcher};
