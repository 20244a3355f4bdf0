//! Fuzzing library for pubmed-pharma-papers.
//!
//! This crate provides fuzzing targets for the affiliation classifier,
//! the company matcher and the E-utilities XML parsers.
//!
//! # Usage
//!
//! ```bash
//! cd crates/pharma-fuzz
//! cargo +nightly fuzz run fuzz_efetch_parse -- -max_total_time=60
//! ```

pub use pubmed_pharma_papers::{affiliation, client::xml};
