//! Affiliation heuristics: academic/industry classification and company matching.
//!
//! Both are pure functions of the affiliation string; the lookup tables in
//! [`keywords`] are process-wide constants shared without locking.

pub mod classifier;
pub mod keywords;
pub mod matcher;

pub use classifier::{Classification, RULES, Rule, classify, is_non_academic};
pub use matcher::{
    DEFAULT_MIN_CONFIDENCE, calculate_confidence, extract_company_names, identify_companies,
    title_case,
};
